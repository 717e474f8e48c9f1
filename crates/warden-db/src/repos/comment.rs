//! Comment repository.

use warden_core::entities::Comment;
use warden_core::errors::CoreError;

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, now, parse_datetime};
use crate::service::WardenService;

const SELECT_COLS: &str = "id, task_id, user_id, body, created_at";

fn row_to_comment(row: &libsql::Row) -> Result<Comment, DatabaseError> {
    Ok(Comment {
        id: row.get(0)?,
        task_id: row.get(1)?,
        user_id: row.get::<Option<i64>>(2)?,
        body: row.get(3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl WardenService {
    /// Add a comment to an existing task. `user_id` is the optional author.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Core` for a blank body, or
    /// `DatabaseError::NoResult` if the task does not exist.
    pub async fn create_comment(
        &self,
        task_id: i64,
        user_id: Option<i64>,
        body: &str,
    ) -> Result<Comment, DatabaseError> {
        if body.trim().is_empty() {
            return Err(CoreError::Validation("comment body is empty".to_string()).into());
        }
        self.get_task(task_id).await?;

        let now = now();
        self.db()
            .conn()
            .execute(
                "INSERT INTO comments (task_id, user_id, body, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![task_id, user_id, body, format_datetime(&now)],
            )
            .await?;
        let id = self.db().last_insert_id();
        tracing::info!(comment_id = id, task_id, "created comment");

        Ok(Comment {
            id,
            task_id,
            user_id,
            body: body.to_string(),
            created_at: now,
        })
    }

    /// Comments on a task, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_comments_for_task(&self, task_id: i64) -> Result<Vec<Comment>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM comments WHERE task_id = ?1 ORDER BY created_at, id"
                ),
                [task_id],
            )
            .await?;

        let mut comments = Vec::new();
        while let Some(row) = rows.next().await? {
            comments.push(row_to_comment(&row)?);
        }
        Ok(comments)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no comment has this id.
    pub async fn delete_comment(&self, comment_id: i64) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute("DELETE FROM comments WHERE id = ?1", [comment_id])
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::info!(comment_id, "deleted comment");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::task::NewTask;
    use crate::test_support::helpers::{create_test_building, create_test_user, test_service};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn comments_list_in_creation_order() {
        let svc = test_service().await;
        let building = create_test_building(&svc).await;
        let author = create_test_user(&svc, "Mai").await;
        let task = svc.create_task(&NewTask::new(building, "Paint hall")).await.unwrap();

        let first = svc.create_comment(task.id, Some(author), "Bought paint").await.unwrap();
        let second = svc.create_comment(task.id, None, "Done").await.unwrap();

        let listed = svc.list_comments_for_task(task.id).await.unwrap();
        assert_eq!(listed, vec![first, second]);
        assert_eq!(listed[0].user_id, Some(author));
    }

    #[tokio::test]
    async fn comment_on_missing_task_is_no_result() {
        let svc = test_service().await;
        let result = svc.create_comment(404, None, "Hello?").await;
        assert!(matches!(result, Err(DatabaseError::NoResult)));
    }

    #[tokio::test]
    async fn blank_comment_is_rejected() {
        let svc = test_service().await;
        let building = create_test_building(&svc).await;
        let task = svc.create_task(&NewTask::new(building, "Quiet")).await.unwrap();

        let err = svc.create_comment(task.id, None, "   ").await.unwrap_err();
        assert!(matches!(err, DatabaseError::Core(CoreError::Validation(_))));
        assert!(err.is_client_fault());
    }

    #[tokio::test]
    async fn delete_comment() {
        let svc = test_service().await;
        let building = create_test_building(&svc).await;
        let task = svc.create_task(&NewTask::new(building, "Noisy")).await.unwrap();
        let comment = svc.create_comment(task.id, None, "Remove me").await.unwrap();

        svc.delete_comment(comment.id).await.unwrap();
        assert!(svc.list_comments_for_task(task.id).await.unwrap().is_empty());
        assert!(matches!(
            svc.delete_comment(comment.id).await,
            Err(DatabaseError::NoResult)
        ));
    }
}
