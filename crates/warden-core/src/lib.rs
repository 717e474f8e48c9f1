//! # warden-core
//!
//! Core types, timezone-aware date boundaries, and task filtering for Warden.
//!
//! This crate provides the foundational types shared across all Warden crates:
//! - Entity structs for all domain objects (users, buildings, tasks, comments)
//! - The enumerated task status set
//! - Cross-cutting error types
//! - Calendar-date to UTC boundary conversion for client timezones
//! - Filter criteria, predicate descriptors, and the `TaskQuery` seam that
//!   storage backends implement
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod filter;
pub mod responses;
pub mod timezone;
