//! Shared test utilities for warden-db unit tests.

pub(crate) mod helpers {
    use chrono::{DateTime, TimeZone, Utc};

    use crate::repos::task::NewTask;
    use crate::service::WardenService;

    /// Create an in-memory `WardenService`.
    pub async fn test_service() -> WardenService {
        WardenService::new_local(":memory:").await.unwrap()
    }

    /// Create a building and return its ID.
    pub async fn create_test_building(svc: &WardenService) -> i64 {
        svc.create_building("Test Building", None).await.unwrap().id
    }

    /// Create a user with a unique email and return its ID.
    pub async fn create_test_user(svc: &WardenService, name: &str) -> i64 {
        let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
        svc.create_user(name, &email).await.unwrap().id
    }

    /// Insert a task with an explicit creation instant.
    pub async fn create_task_at(
        svc: &WardenService,
        building_id: i64,
        title: &str,
        created_at: DateTime<Utc>,
    ) -> i64 {
        svc.create_task(&NewTask::new(building_id, title).created_at(created_at))
            .await
            .unwrap()
            .id
    }

    /// Shorthand for a whole-second UTC instant.
    pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }
}
