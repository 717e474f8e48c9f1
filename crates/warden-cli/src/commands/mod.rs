pub mod building;
pub mod comment;
pub mod dispatch;
pub mod shared;
pub mod task;
pub mod user;
