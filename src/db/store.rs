use async_trait::async_trait;
use sqlx::PgPool;

use super::query::{build_search_query, BindValue, SELECT_HOTEL_BY_ID};
use crate::models::hotel::Hotel;
use crate::models::search::SearchCriteria;

/// Read access to hotels, injected into the handlers.
#[async_trait]
pub trait HotelStore: Send + Sync {
    /// Hotels matching every supplied criterion, ordered by name.
    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Hotel>, sqlx::Error>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Hotel>, sqlx::Error>;
}

pub struct PgHotelStore {
    pool: PgPool,
}

impl PgHotelStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HotelStore for PgHotelStore {
    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Hotel>, sqlx::Error> {
        let query = build_search_query(criteria);
        log::debug!("search: {} ({} params)", query.sql, query.params.len());

        let mut stmt = sqlx::query_as::<_, Hotel>(&query.sql);
        for value in &query.params {
            stmt = match value {
                BindValue::Text(text) => stmt.bind(text.as_str()),
                BindValue::Float(number) => stmt.bind(*number),
            };
        }

        // The connection goes back to the pool when `conn` drops, error or not.
        let mut conn = self.pool.acquire().await?;
        stmt.fetch_all(&mut *conn).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Hotel>, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query_as::<_, Hotel>(SELECT_HOTEL_BY_ID)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }
}
