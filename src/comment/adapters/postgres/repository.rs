//! `PostgreSQL` repository implementation for comment persistence.
//!
//! Comment creation and its paired history row share one transaction, so a
//! comment can never appear without its audit trail (or vice versa).

use super::{
    models::{CommentRow, NewCommentRow},
    schema::task_comments,
};
use crate::comment::{
    domain::{Comment, CommentId, NewComment},
    ports::{CommentRepository, CommentRepositoryError, CommentRepositoryResult},
};
use crate::history::adapters::postgres::{models::NewHistoryRow, schema::task_histories};
use crate::history::domain::NewHistoryEntry;
use crate::storage::postgres::{PgPool, get_conn, run_blocking};
use crate::task::adapters::postgres::schema::tasks;
use async_trait::async_trait;
use diesel::prelude::*;

/// `PostgreSQL`-backed comment repository.
#[derive(Debug, Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl From<diesel::result::Error> for CommentRepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        Self::persistence(err)
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn create(
        &self,
        comment: &NewComment,
        history: &NewHistoryEntry,
    ) -> CommentRepositoryResult<Comment> {
        let pool = self.pool.clone();
        let task_id = comment.task_id();
        let new_row = NewCommentRow::from_domain(comment);
        let history_row = NewHistoryRow::from_domain(history);
        run_blocking(
            move || {
                let mut conn = get_conn(&pool, CommentRepositoryError::persistence)?;
                conn.transaction::<_, CommentRepositoryError, _>(|tx| {
                    let owning_task = tasks::table
                        .find(task_id.value())
                        .select(tasks::id)
                        .first::<i32>(tx)
                        .optional()?;
                    if owning_task.is_none() {
                        return Err(CommentRepositoryError::TaskNotFound(task_id));
                    }

                    let row = diesel::insert_into(task_comments::table)
                        .values(&new_row)
                        .returning(CommentRow::as_returning())
                        .get_result::<CommentRow>(tx)?;
                    diesel::insert_into(task_histories::table)
                        .values(&history_row)
                        .execute(tx)?;
                    Ok(row.into_domain())
                })
            },
            CommentRepositoryError::persistence,
        )
        .await
    }

    async fn update_text(
        &self,
        id: CommentId,
        text: &str,
    ) -> CommentRepositoryResult<Option<Comment>> {
        let pool = self.pool.clone();
        let new_text = text.to_owned();
        run_blocking(
            move || {
                let mut conn = get_conn(&pool, CommentRepositoryError::persistence)?;
                let row = diesel::update(task_comments::table.find(id.value()))
                    .set(task_comments::text.eq(new_text))
                    .returning(CommentRow::as_returning())
                    .get_result::<CommentRow>(&mut conn)
                    .optional()
                    .map_err(CommentRepositoryError::persistence)?;
                Ok(row.map(CommentRow::into_domain))
            },
            CommentRepositoryError::persistence,
        )
        .await
    }

    async fn delete(&self, id: CommentId) -> CommentRepositoryResult<bool> {
        let pool = self.pool.clone();
        run_blocking(
            move || {
                let mut conn = get_conn(&pool, CommentRepositoryError::persistence)?;
                let removed = diesel::delete(task_comments::table.find(id.value()))
                    .execute(&mut conn)
                    .map_err(CommentRepositoryError::persistence)?;
                Ok(removed > 0)
            },
            CommentRepositoryError::persistence,
        )
        .await
    }
}
