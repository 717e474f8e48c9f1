use warden_core::responses::DeleteResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CommentCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `wdn comment`.
pub async fn handle(
    action: &CommentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CommentCommands::Add {
            task_id,
            body,
            user,
        } => {
            let comment = ctx.service.create_comment(*task_id, *user, body).await?;
            output(&comment, flags.format)
        }
        CommentCommands::List { task_id } => {
            let comments = ctx.service.list_comments_for_task(*task_id).await?;
            output(&comments, flags.format)
        }
        CommentCommands::Delete { id } => {
            ctx.service.delete_comment(*id).await?;
            output(
                &DeleteResponse {
                    entity: String::from("comment"),
                    id: *id,
                    deleted: true,
                },
                flags.format,
            )
        }
    }
}
