use warden_core::entities::Task;
use warden_db::updates::task::TaskUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_instant, parse_status};
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub assign: Option<i64>,
    pub unassign: bool,
    pub due: Option<String>,
    pub clear_due: bool,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let task = update(params, ctx).await?;
    output(&task, flags.format)
}

async fn update(params: Params, ctx: &AppContext) -> anyhow::Result<Task> {
    validate_update_params(&params)?;

    let mut builder = TaskUpdateBuilder::new();
    if let Some(title) = params.title.as_deref() {
        builder = builder.title(title);
    }
    if let Some(description) = params.description {
        builder = builder.description(Some(description));
    }
    if let Some(status) = params.status.as_deref() {
        builder = builder.status(parse_status(status)?);
    }
    if let Some(user_id) = params.assign {
        builder = builder.assigned_to(Some(user_id));
    } else if params.unassign {
        builder = builder.assigned_to(None);
    }
    if let Some(due) = params.due.as_deref() {
        let due = parse_instant(due, &ctx.config.general.default_timezone)?;
        builder = builder.due_at(Some(due));
    } else if params.clear_due {
        builder = builder.due_at(None);
    }

    Ok(ctx.service.update_task(params.id, builder.build()).await?)
}

fn validate_update_params(params: &Params) -> anyhow::Result<()> {
    if params.title.is_none()
        && params.description.is_none()
        && params.status.is_none()
        && params.assign.is_none()
        && !params.unassign
        && params.due.is_none()
        && !params.clear_due
    {
        anyhow::bail!(
            "At least one of --title, --description, --status, --assign, --unassign, --due, or --clear-due must be provided"
        );
    }
    Ok(())
}
