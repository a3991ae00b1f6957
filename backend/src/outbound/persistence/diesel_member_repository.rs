//! PostgreSQL-backed `MemberRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::member::{Member, MemberChanges, NewMember};
use crate::domain::ports::{MemberPersistenceError, MemberRepository};

use super::diesel_error_mapping::{map_member_diesel_error, map_pool_error};
use super::models::{MemberChangesRow, MemberRow, NewMemberRow};
use super::pool::{DbPool, PoolError};
use super::schema::members;

/// Diesel-backed implementation of the `MemberRepository` port.
#[derive(Clone)]
pub struct DieselMemberRepository {
    pool: DbPool,
}

impl DieselMemberRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_checkout_error(error: PoolError) -> MemberPersistenceError {
    map_pool_error(error, MemberPersistenceError::connection)
}

#[async_trait]
impl MemberRepository for DieselMemberRepository {
    async fn insert(&self, member: &NewMember) -> Result<Member, MemberPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;
        let row: MemberRow = diesel::insert_into(members::table)
            .values(NewMemberRow::from(member))
            .returning(MemberRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_member_diesel_error)?;
        Ok(row.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Member>, MemberPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;
        let row = members::table
            .find(id)
            .select(MemberRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_member_diesel_error)?;
        Ok(row.map(Member::from))
    }

    async fn list(&self) -> Result<Vec<Member>, MemberPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;
        let rows = members::table
            .order((members::created_at.desc(), members::id.desc()))
            .select(MemberRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_member_diesel_error)?;
        Ok(rows.into_iter().map(Member::from).collect())
    }

    async fn search(&self, query: &str) -> Result<Vec<Member>, MemberPersistenceError> {
        let needle = query.trim();
        if needle.is_empty() {
            return self.list().await;
        }
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;
        let pattern = format!("%{needle}%");
        let rows = members::table
            .filter(members::name.ilike(pattern))
            .order((members::created_at.desc(), members::id.desc()))
            .select(MemberRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_member_diesel_error)?;
        Ok(rows.into_iter().map(Member::from).collect())
    }

    async fn update(
        &self,
        id: i32,
        changes: &MemberChanges,
        photo: Option<&str>,
    ) -> Result<Option<Member>, MemberPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;
        let row = diesel::update(members::table.find(id))
            .set(MemberChangesRow::new(changes, photo))
            .returning(MemberRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_member_diesel_error)?;
        Ok(row.map(Member::from))
    }

    async fn delete(&self, id: i32) -> Result<(), MemberPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;
        diesel::delete(members::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_member_diesel_error)?;
        Ok(())
    }

    async fn count(&self) -> Result<i64, MemberPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;
        members::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_member_diesel_error)
    }
}
