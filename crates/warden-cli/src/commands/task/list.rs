use warden_core::entities::Task;
use warden_core::filter::FilterCriteria;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskListArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &TaskListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tasks = fetch(args, ctx).await?;
    output(&tasks, flags.format)
}

async fn fetch(args: &TaskListArgs, ctx: &AppContext) -> anyhow::Result<Vec<Task>> {
    let criteria = build_criteria(args, &ctx.config.general.default_timezone);
    let limit = effective_limit(args.limit, ctx.config.general.default_limit);

    let tasks = match args.building {
        Some(building_id) => {
            ctx.service
                .filter_building_tasks(building_id, &criteria, limit, args.offset)
                .await?
        }
        None => {
            ctx.service
                .filter_tasks(&criteria, limit, args.offset)
                .await?
        }
    };
    Ok(tasks)
}

/// Criteria from the list flags. Without `--timezone`, dates are read in the
/// configured default zone.
fn build_criteria(args: &TaskListArgs, default_timezone: &str) -> FilterCriteria {
    let mut builder = FilterCriteria::builder()
        .timezone(args.timezone.as_deref().unwrap_or(default_timezone));
    if let Some(from) = args.created_from.as_deref() {
        builder = builder.created_from(from);
    }
    if let Some(to) = args.created_to.as_deref() {
        builder = builder.created_to(to);
    }
    if let Some(user_id) = args.assigned_to {
        builder = builder.assigned_to(user_id);
    }
    if let Some(status) = args.status.as_deref() {
        builder = builder.status(status);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use warden_db::repos::task::NewTask;

    use super::{build_criteria, fetch};
    use crate::cli::subcommands::TaskListArgs;
    use crate::context::AppContext;

    #[test]
    fn default_timezone_fills_missing_flag() {
        let args = TaskListArgs {
            created_from: Some(String::from("2025-11-01")),
            ..TaskListArgs::default()
        };
        let criteria = build_criteria(&args, "Asia/Ho_Chi_Minh");
        assert_eq!(criteria.timezone.as_deref(), Some("Asia/Ho_Chi_Minh"));
        assert_eq!(criteria.created_from.as_deref(), Some("2025-11-01"));
        assert!(criteria.status.is_none());
    }

    #[test]
    fn explicit_timezone_wins() {
        let args = TaskListArgs {
            timezone: Some(String::from("Europe/Berlin")),
            ..TaskListArgs::default()
        };
        let criteria = build_criteria(&args, "UTC");
        assert_eq!(criteria.timezone.as_deref(), Some("Europe/Berlin"));
    }

    #[tokio::test]
    async fn lists_tasks_for_local_day() {
        let ctx = AppContext::in_memory().await;
        let building = ctx.service.create_building("HQ", None).await.expect("building");
        for (title, hour) in [("before", 16), ("after", 17)] {
            ctx.service
                .create_task(
                    &NewTask::new(building.id, title)
                        .created_at(Utc.with_ymd_and_hms(2025, 11, 1, hour, 0, 0).unwrap()),
                )
                .await
                .expect("task");
        }

        let args = TaskListArgs {
            building: Some(building.id),
            created_from: Some(String::from("2025-11-01")),
            created_to: Some(String::from("2025-11-01")),
            timezone: Some(String::from("Asia/Ho_Chi_Minh")),
            ..TaskListArgs::default()
        };
        let titles: Vec<_> = fetch(&args, &ctx)
            .await
            .expect("tasks")
            .into_iter()
            .map(|task| task.title)
            .collect();
        assert_eq!(titles, vec!["before"]);
    }

    #[tokio::test]
    async fn invalid_timezone_is_reported() {
        let ctx = AppContext::in_memory().await;
        let args = TaskListArgs {
            created_from: Some(String::from("2025-11-01")),
            timezone: Some(String::from("Invalid/Zone")),
            ..TaskListArgs::default()
        };
        let err = fetch(&args, &ctx).await.expect_err("should fail");
        assert!(format!("{err:#}").contains("Invalid/Zone"));
    }
}
