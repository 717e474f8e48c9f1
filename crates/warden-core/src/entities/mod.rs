//! Entity structs for all Warden domain objects.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! validation.

mod building;
mod comment;
mod task;
mod user;

pub use building::Building;
pub use comment::Comment;
pub use task::Task;
pub use user::User;
