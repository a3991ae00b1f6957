//! PostgreSQL-backed `NewsRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::news::{News, NewsDraft};
use crate::domain::ports::{NewsPersistenceError, NewsRepository};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewsDraftRow, NewsRow};
use super::pool::{DbPool, PoolError};
use super::schema::news;

/// Diesel-backed implementation of the `NewsRepository` port.
#[derive(Clone)]
pub struct DieselNewsRepository {
    pool: DbPool,
}

impl DieselNewsRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_checkout_error(error: PoolError) -> NewsPersistenceError {
    map_pool_error(error, NewsPersistenceError::connection)
}

fn map_query_error(error: diesel::result::Error) -> NewsPersistenceError {
    map_diesel_error(
        error,
        NewsPersistenceError::query,
        NewsPersistenceError::connection,
    )
}

#[async_trait]
impl NewsRepository for DieselNewsRepository {
    async fn insert(&self, draft: &NewsDraft) -> Result<News, NewsPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;
        let row: NewsRow = diesel::insert_into(news::table)
            .values(NewsDraftRow::from(draft))
            .returning(NewsRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_query_error)?;
        Ok(row.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<News>, NewsPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;
        let row = news::table
            .find(id)
            .select(NewsRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_query_error)?;
        Ok(row.map(News::from))
    }

    async fn list(&self) -> Result<Vec<News>, NewsPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;
        let rows = news::table
            .order((news::created_at.desc(), news::id.desc()))
            .select(NewsRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_query_error)?;
        Ok(rows.into_iter().map(News::from).collect())
    }

    async fn latest(&self, limit: i64) -> Result<Vec<News>, NewsPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;
        let rows = news::table
            .order((news::created_at.desc(), news::id.desc()))
            .limit(limit)
            .select(NewsRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_query_error)?;
        Ok(rows.into_iter().map(News::from).collect())
    }

    async fn update(
        &self,
        id: i32,
        draft: &NewsDraft,
    ) -> Result<Option<News>, NewsPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;
        let row = diesel::update(news::table.find(id))
            .set(NewsDraftRow::from(draft))
            .returning(NewsRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_query_error)?;
        Ok(row.map(News::from))
    }

    async fn delete(&self, id: i32) -> Result<(), NewsPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;
        diesel::delete(news::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_query_error)?;
        Ok(())
    }

    async fn count(&self) -> Result<i64, NewsPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;
        news::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_query_error)
    }
}
