//! PostgreSQL-backed `ActivityRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::activity::{Activity, ActivityDraft};
use crate::domain::ports::{ActivityPersistenceError, ActivityRepository};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ActivityDraftRow, ActivityRow};
use super::pool::{DbPool, PoolError};
use super::schema::activities;

/// Diesel-backed implementation of the `ActivityRepository` port.
#[derive(Clone)]
pub struct DieselActivityRepository {
    pool: DbPool,
}

impl DieselActivityRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_checkout_error(error: PoolError) -> ActivityPersistenceError {
    map_pool_error(error, ActivityPersistenceError::connection)
}

fn map_query_error(error: diesel::result::Error) -> ActivityPersistenceError {
    map_diesel_error(
        error,
        ActivityPersistenceError::query,
        ActivityPersistenceError::connection,
    )
}

#[async_trait]
impl ActivityRepository for DieselActivityRepository {
    async fn insert(&self, draft: &ActivityDraft) -> Result<Activity, ActivityPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;
        let row: ActivityRow = diesel::insert_into(activities::table)
            .values(ActivityDraftRow::from(draft))
            .returning(ActivityRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_query_error)?;
        Ok(row.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Activity>, ActivityPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;
        let row = activities::table
            .find(id)
            .select(ActivityRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_query_error)?;
        Ok(row.map(Activity::from))
    }

    async fn list(&self) -> Result<Vec<Activity>, ActivityPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;
        let rows = activities::table
            .order((activities::date.desc(), activities::id.desc()))
            .select(ActivityRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_query_error)?;
        Ok(rows.into_iter().map(Activity::from).collect())
    }

    async fn upcoming(&self, limit: i64) -> Result<Vec<Activity>, ActivityPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;
        let rows = activities::table
            .order((activities::date.asc(), activities::id.asc()))
            .limit(limit)
            .select(ActivityRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_query_error)?;
        Ok(rows.into_iter().map(Activity::from).collect())
    }

    async fn update(
        &self,
        id: i32,
        draft: &ActivityDraft,
    ) -> Result<Option<Activity>, ActivityPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;
        let row = diesel::update(activities::table.find(id))
            .set(ActivityDraftRow::from(draft))
            .returning(ActivityRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_query_error)?;
        Ok(row.map(Activity::from))
    }

    async fn delete(&self, id: i32) -> Result<(), ActivityPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;
        diesel::delete(activities::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_query_error)?;
        Ok(())
    }

    async fn count(&self) -> Result<i64, ActivityPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;
        activities::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_query_error)
    }
}
