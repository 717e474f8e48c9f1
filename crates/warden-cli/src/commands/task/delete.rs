use warden_core::responses::DeleteResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.service.delete_task(id).await?;
    output(
        &DeleteResponse {
            entity: String::from("task"),
            id,
            deleted: true,
        },
        flags.format,
    )
}
