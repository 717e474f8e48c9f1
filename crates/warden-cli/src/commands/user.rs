use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `wdn user`.
pub async fn handle(
    action: &UserCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UserCommands::Create { name, email } => {
            if !email.contains('@') {
                anyhow::bail!("invalid email '{email}'");
            }
            let user = ctx.service.create_user(name, email).await?;
            output(&user, flags.format)
        }
        UserCommands::List { limit } => {
            let limit = effective_limit(*limit, ctx.config.general.default_limit);
            let users = ctx.service.list_users(limit).await?;
            output(&users, flags.format)
        }
    }
}
