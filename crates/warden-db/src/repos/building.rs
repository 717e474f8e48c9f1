//! Building repository: CRUD with cascading delete of owned tasks.

use warden_core::entities::Building;

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_opt_string, now, parse_datetime};
use crate::service::WardenService;
use crate::updates::building::BuildingUpdate;

const SELECT_COLS: &str = "id, name, address, created_at, updated_at";

fn row_to_building(row: &libsql::Row) -> Result<Building, DatabaseError> {
    Ok(Building {
        id: row.get(0)?,
        name: row.get(1)?,
        address: get_opt_string(row, 2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
        updated_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl WardenService {
    /// # Errors
    ///
    /// Returns `DatabaseError` if the INSERT fails.
    pub async fn create_building(
        &self,
        name: &str,
        address: Option<&str>,
    ) -> Result<Building, DatabaseError> {
        let now = now();
        self.db()
            .conn()
            .execute(
                "INSERT INTO buildings (name, address, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?3)",
                libsql::params![name, address, format_datetime(&now)],
            )
            .await?;
        let id = self.db().last_insert_id();
        tracing::info!(building_id = id, "created building");

        Ok(Building {
            id,
            name: name.to_string(),
            address: address.map(String::from),
            created_at: now,
            updated_at: now,
        })
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no building has this id.
    pub async fn get_building(&self, id: i64) -> Result<Building, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM buildings WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_building(&row)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_buildings(&self, limit: u32) -> Result<Vec<Building>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM buildings ORDER BY name, id LIMIT ?1"),
                [i64::from(limit)],
            )
            .await?;

        let mut buildings = Vec::new();
        while let Some(row) = rows.next().await? {
            buildings.push(row_to_building(&row)?);
        }
        Ok(buildings)
    }

    /// Apply the `Some` fields of `update`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no building has this id.
    pub async fn update_building(
        &self,
        building_id: i64,
        update: BuildingUpdate,
    ) -> Result<Building, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(ref name) = update.name {
            params.push(name.clone().into());
            sets.push(format!("name = ?{}", params.len()));
        }
        if let Some(ref address) = update.address {
            params.push(address.clone().map_or(libsql::Value::Null, Into::into));
            sets.push(format!("address = ?{}", params.len()));
        }

        if sets.is_empty() {
            return self.get_building(building_id).await;
        }

        params.push(format_datetime(&now()).into());
        sets.push(format!("updated_at = ?{}", params.len()));

        params.push(building_id.into());
        let sql = format!(
            "UPDATE buildings SET {} WHERE id = ?{}",
            sets.join(", "),
            params.len()
        );
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }

        tracing::info!(building_id, "updated building");
        self.get_building(building_id).await
    }

    /// Delete a building together with its tasks and their comments.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no building has this id.
    pub async fn delete_building(&self, building_id: i64) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute("DELETE FROM buildings WHERE id = ?1", [building_id])
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::info!(building_id, "deleted building");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::task::NewTask;
    use crate::test_support::helpers::test_service;
    use crate::updates::building::BuildingUpdateBuilder;

    #[tokio::test]
    async fn create_building_roundtrip() {
        let svc = test_service().await;
        let building = svc
            .create_building("Riverside Tower", Some("12 River Rd"))
            .await
            .unwrap();

        let fetched = svc.get_building(building.id).await.unwrap();
        assert_eq!(fetched, building);
        assert_eq!(fetched.address.as_deref(), Some("12 River Rd"));
    }

    #[tokio::test]
    async fn update_building_partial() {
        let svc = test_service().await;
        let building = svc.create_building("Old name", Some("Somewhere")).await.unwrap();

        let update = BuildingUpdateBuilder::new().name("New name").build();
        let updated = svc.update_building(building.id, update).await.unwrap();
        assert_eq!(updated.name, "New name");
        assert_eq!(updated.address.as_deref(), Some("Somewhere"));
        assert_eq!(updated.created_at, building.created_at);

        let update = BuildingUpdateBuilder::new().address(None).build();
        let updated = svc.update_building(building.id, update).await.unwrap();
        assert_eq!(updated.address, None);
    }

    #[tokio::test]
    async fn update_missing_building_is_no_result() {
        let svc = test_service().await;
        let update = BuildingUpdateBuilder::new().name("Ghost").build();
        let result = svc.update_building(404, update).await;
        assert!(matches!(result, Err(DatabaseError::NoResult)));
    }

    #[tokio::test]
    async fn delete_building_cascades_to_tasks_and_comments() {
        let svc = test_service().await;
        let building = svc.create_building("Doomed", None).await.unwrap();
        let task = svc
            .create_task(&NewTask::new(building.id, "Fix roof"))
            .await
            .unwrap();
        svc.create_comment(task.id, None, "Leaking again").await.unwrap();

        svc.delete_building(building.id).await.unwrap();

        assert!(matches!(
            svc.get_building(building.id).await,
            Err(DatabaseError::NoResult)
        ));
        assert!(matches!(svc.get_task(task.id).await, Err(DatabaseError::NoResult)));
        assert!(svc.list_comments_for_task(task.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_missing_building_is_no_result() {
        let svc = test_service().await;
        assert!(matches!(
            svc.delete_building(404).await,
            Err(DatabaseError::NoResult)
        ));
    }

    #[tokio::test]
    async fn list_buildings_sorted_by_name() {
        let svc = test_service().await;
        svc.create_building("B Block", None).await.unwrap();
        svc.create_building("A Block", None).await.unwrap();

        let names: Vec<_> = svc
            .list_buildings(10)
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["A Block", "B Block"]);
    }
}
