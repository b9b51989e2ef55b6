use crate::date::format_date;
use crate::error::CoreError;
use crate::models::{NewTask, Task, TaskRow};
use crate::repository::SqliteRepository;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
impl super::TaskRepository for SqliteRepository {
    async fn add_task(&self, data: NewTask) -> Result<i64, CoreError> {
        let result = sqlx::query(
            r#"INSERT INTO scheduler (date, title, comment, repeat)
            VALUES ($1, $2, $3, $4)"#,
        )
        .bind(format_date(data.date))
        .bind(&data.title)
        .bind(&data.comment)
        .bind(&data.repeat)
        .execute(self.pool())
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError> {
        let row: Option<TaskRow> = sqlx::query_as(
            "SELECT id, date, title, comment, repeat FROM scheduler WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        row.map(Task::try_from).transpose()
    }

    async fn update_task(&self, task: &Task) -> Result<(), CoreError> {
        let row = TaskRow::from(task);
        let result = sqlx::query(
            r#"UPDATE scheduler
            SET date = $1, title = $2, comment = $3, repeat = $4
            WHERE id = $5"#,
        )
        .bind(&row.date)
        .bind(&row.title)
        .bind(&row.comment)
        .bind(&row.repeat)
        .bind(row.id)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(task.id));
        }
        Ok(())
    }

    async fn update_task_date(&self, id: i64, date: NaiveDate) -> Result<(), CoreError> {
        let result = sqlx::query("UPDATE scheduler SET date = $1 WHERE id = $2")
            .bind(format_date(date))
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(id));
        }
        Ok(())
    }

    async fn delete_task(&self, id: i64) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM scheduler WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(id));
        }
        Ok(())
    }

    async fn list_tasks(&self, limit: u32) -> Result<Vec<Task>, CoreError> {
        // Fixed-width YYYYMMDD text sorts in calendar order.
        let rows: Vec<TaskRow> = sqlx::query_as(
            r#"SELECT id, date, title, comment, repeat FROM scheduler
            ORDER BY date ASC, id ASC
            LIMIT $1"#,
        )
        .bind(i64::from(limit))
        .fetch_all(self.pool())
        .await?;

        rows.into_iter().map(Task::try_from).collect()
    }
}
