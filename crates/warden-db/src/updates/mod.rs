//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields generate SET clauses in the dynamic UPDATE SQL. `Option<Option<T>>`
//! fields distinguish "leave unchanged" from "set to NULL".

pub mod building;
pub mod task;
