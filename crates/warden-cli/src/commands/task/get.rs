use warden_core::responses::TaskDetailResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let task = ctx.service.get_task(id).await?;
    let comments = ctx.service.list_comments_for_task(id).await?;
    output(&TaskDetailResponse { task, comments }, flags.format)
}
