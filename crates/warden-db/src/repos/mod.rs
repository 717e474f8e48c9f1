//! Repository modules implementing CRUD operations for all Warden entities.
//!
//! Each module adds methods to `WardenService` via `impl WardenService` blocks.

pub mod building;
pub mod comment;
pub mod task;
pub mod user;
