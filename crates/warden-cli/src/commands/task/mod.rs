mod create;
mod delete;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::context::AppContext;

/// Handle `wdn task`.
pub async fn handle(
    action: &TaskCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TaskCommands::Create {
            building,
            title,
            description,
            created_by,
            assigned_to,
            status,
            due,
        } => {
            create::run(
                create::Params {
                    building_id: *building,
                    title: title.clone(),
                    description: description.clone(),
                    created_by: *created_by,
                    assigned_to: *assigned_to,
                    status: status.clone(),
                    due: due.clone(),
                },
                ctx,
                flags,
            )
            .await
        }
        TaskCommands::Get { id } => get::run(*id, ctx, flags).await,
        TaskCommands::Update {
            id,
            title,
            description,
            status,
            assign,
            unassign,
            due,
            clear_due,
        } => {
            update::run(
                update::Params {
                    id: *id,
                    title: title.clone(),
                    description: description.clone(),
                    status: status.clone(),
                    assign: *assign,
                    unassign: *unassign,
                    due: due.clone(),
                    clear_due: *clear_due,
                },
                ctx,
                flags,
            )
            .await
        }
        TaskCommands::Delete { id } => delete::run(*id, ctx, flags).await,
        TaskCommands::List(args) => list::run(args, ctx, flags).await,
    }
}
