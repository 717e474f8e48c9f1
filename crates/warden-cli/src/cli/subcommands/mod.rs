mod building;
mod comment;
mod task;
mod user;

pub use building::BuildingCommands;
pub use comment::CommentCommands;
pub use task::{TaskCommands, TaskListArgs};
pub use user::UserCommands;
