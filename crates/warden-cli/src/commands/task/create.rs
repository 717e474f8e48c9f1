use warden_core::entities::Task;
use warden_db::repos::task::NewTask;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_instant, parse_status};
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub building_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub created_by: Option<i64>,
    pub assigned_to: Option<i64>,
    pub status: Option<String>,
    pub due: Option<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let task = create(params, ctx).await?;
    output(&task, flags.format)
}

async fn create(params: Params, ctx: &AppContext) -> anyhow::Result<Task> {
    if params.title.trim().is_empty() {
        anyhow::bail!("--title must not be empty");
    }

    let mut new = NewTask::new(params.building_id, params.title);
    if let Some(description) = params.description {
        new = new.description(description);
    }
    if let Some(user_id) = params.created_by {
        new = new.created_by(user_id);
    }
    if let Some(user_id) = params.assigned_to {
        new = new.assigned_to(user_id);
    }
    if let Some(status) = params.status.as_deref() {
        new = new.status(parse_status(status)?);
    }
    if let Some(due) = params.due.as_deref() {
        new = new.due_at(parse_instant(due, &ctx.config.general.default_timezone)?);
    }

    Ok(ctx.service.create_task(&new).await?)
}
