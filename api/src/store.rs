use async_trait::async_trait;
use chrono::Utc;
use shared::{Campground, CampgroundFields, Review};
use sqlx::PgPool;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Persistence client for campgrounds and their reviews.
///
/// Every id-based read returns an explicit `Option` so callers must branch
/// on the not-found case instead of dereferencing a missing entity.
#[async_trait]
pub trait Store: Send + Sync {
    /// All campgrounds in creation order.
    async fn list(&self) -> StoreResult<Vec<Campground>>;

    async fn create(&self, fields: CampgroundFields) -> StoreResult<Campground>;

    async fn get(&self, id: Uuid) -> StoreResult<Option<Campground>>;

    /// Full field replace. `None` when no campground has this id.
    async fn update(&self, id: Uuid, fields: CampgroundFields) -> StoreResult<Option<Campground>>;

    /// Removes the campground and, with it, its reviews. `false` when the
    /// id was already absent, so a repeated delete stays a plain not-found.
    async fn delete(&self, id: Uuid) -> StoreResult<bool>;

    /// Creates a review and appends it to the campground's sequence.
    /// `None` when the campground is absent.
    async fn add_review(&self, campground_id: Uuid, body: String, rating: f64)
        -> StoreResult<Option<Review>>;

    /// Reviews of a campground in append order.
    async fn reviews_for(&self, campground_id: Uuid) -> StoreResult<Vec<Review>>;

    /// Cheap connectivity probe for the health endpoint.
    async fn ping(&self) -> StoreResult<()>;
}

/// Postgres-backed store.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const CAMPGROUND_COLUMNS: &str = "id, title, price, description, location, image, created_at";

#[async_trait]
impl Store for PgStore {
    async fn list(&self) -> StoreResult<Vec<Campground>> {
        let rows = sqlx::query_as::<_, Campground>(
            "SELECT id, title, price, description, location, image, created_at
             FROM campgrounds ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create(&self, fields: CampgroundFields) -> StoreResult<Campground> {
        let campground = sqlx::query_as::<_, Campground>(&format!(
            "INSERT INTO campgrounds (id, title, price, description, location, image)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {CAMPGROUND_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(fields.title)
        .bind(fields.price)
        .bind(fields.description)
        .bind(fields.location)
        .bind(fields.image)
        .fetch_one(&self.pool)
        .await?;
        Ok(campground)
    }

    async fn get(&self, id: Uuid) -> StoreResult<Option<Campground>> {
        let campground = sqlx::query_as::<_, Campground>(&format!(
            "SELECT {CAMPGROUND_COLUMNS} FROM campgrounds WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(campground)
    }

    async fn update(&self, id: Uuid, fields: CampgroundFields) -> StoreResult<Option<Campground>> {
        let campground = sqlx::query_as::<_, Campground>(&format!(
            "UPDATE campgrounds
             SET title = $2, price = $3, description = $4, location = $5, image = $6
             WHERE id = $1
             RETURNING {CAMPGROUND_COLUMNS}"
        ))
        .bind(id)
        .bind(fields.title)
        .bind(fields.price)
        .bind(fields.description)
        .bind(fields.location)
        .bind(fields.image)
        .fetch_optional(&self.pool)
        .await?;
        Ok(campground)
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        // Reviews go with the campground via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM campgrounds WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn add_review(
        &self,
        campground_id: Uuid,
        body: String,
        rating: f64,
    ) -> StoreResult<Option<Review>> {
        let exists = sqlx::query_scalar::<_, i32>("SELECT 1 FROM campgrounds WHERE id = $1")
            .bind(campground_id)
            .fetch_optional(&self.pool)
            .await?;
        if exists.is_none() {
            return Ok(None);
        }

        let review = sqlx::query_as::<_, Review>(
            "INSERT INTO reviews (id, campground_id, body, rating)
             VALUES ($1, $2, $3, $4)
             RETURNING id, campground_id, body, rating, created_at",
        )
        .bind(Uuid::new_v4())
        .bind(campground_id)
        .bind(body)
        .bind(rating)
        .fetch_one(&self.pool)
        .await?;
        Ok(Some(review))
    }

    async fn reviews_for(&self, campground_id: Uuid) -> StoreResult<Vec<Review>> {
        let reviews = sqlx::query_as::<_, Review>(
            "SELECT id, campground_id, body, rating, created_at
             FROM reviews WHERE campground_id = $1
             ORDER BY created_at, id",
        )
        .bind(campground_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(reviews)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }
}

/// In-memory store with the same observable contract as `PgStore`. Used by
/// the integration tests and handy for local demos without Postgres.
#[derive(Default)]
pub struct MemStore {
    inner: RwLock<MemInner>,
}

#[derive(Default)]
struct MemInner {
    // Insertion-ordered campgrounds; reviews keyed by owning campground.
    campgrounds: Vec<Campground>,
    reviews: HashMap<Uuid, Vec<Review>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemStore {
    async fn list(&self) -> StoreResult<Vec<Campground>> {
        Ok(self.inner.read().await.campgrounds.clone())
    }

    async fn create(&self, fields: CampgroundFields) -> StoreResult<Campground> {
        let campground = Campground {
            id: Uuid::new_v4(),
            title: fields.title,
            price: fields.price,
            description: fields.description,
            location: fields.location,
            image: fields.image,
            created_at: Utc::now(),
        };
        self.inner.write().await.campgrounds.push(campground.clone());
        Ok(campground)
    }

    async fn get(&self, id: Uuid) -> StoreResult<Option<Campground>> {
        let inner = self.inner.read().await;
        Ok(inner.campgrounds.iter().find(|c| c.id == id).cloned())
    }

    async fn update(&self, id: Uuid, fields: CampgroundFields) -> StoreResult<Option<Campground>> {
        let mut inner = self.inner.write().await;
        let Some(campground) = inner.campgrounds.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        campground.title = fields.title;
        campground.price = fields.price;
        campground.description = fields.description;
        campground.location = fields.location;
        campground.image = fields.image;
        Ok(Some(campground.clone()))
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        let before = inner.campgrounds.len();
        inner.campgrounds.retain(|c| c.id != id);
        inner.reviews.remove(&id);
        Ok(inner.campgrounds.len() < before)
    }

    async fn add_review(
        &self,
        campground_id: Uuid,
        body: String,
        rating: f64,
    ) -> StoreResult<Option<Review>> {
        let mut inner = self.inner.write().await;
        if !inner.campgrounds.iter().any(|c| c.id == campground_id) {
            return Ok(None);
        }
        let review = Review {
            id: Uuid::new_v4(),
            campground_id,
            body,
            rating,
            created_at: Utc::now(),
        };
        inner
            .reviews
            .entry(campground_id)
            .or_default()
            .push(review.clone());
        Ok(Some(review))
    }

    async fn reviews_for(&self, campground_id: Uuid) -> StoreResult<Vec<Review>> {
        let inner = self.inner.read().await;
        Ok(inner
            .reviews
            .get(&campground_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str) -> CampgroundFields {
        CampgroundFields {
            title: title.to_string(),
            price: 25.0,
            description: "nice".to_string(),
            location: "CO".to_string(),
            image: "http://x/y.jpg".to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips_fields() {
        let store = MemStore::new();
        let created = store.create(fields("Pine Ridge")).await.unwrap();

        let fetched = store.get(created.id).await.unwrap().expect("created campground");
        assert_eq!(fetched.title, "Pine Ridge");
        assert_eq!(fetched.price, 25.0);
        assert_eq!(fetched.description, "nice");
        assert_eq!(fetched.location, "CO");
        assert_eq!(fetched.image, "http://x/y.jpg");
    }

    #[tokio::test]
    async fn update_replaces_every_field_and_keeps_id() {
        let store = MemStore::new();
        let created = store.create(fields("Old")).await.unwrap();

        let replaced = CampgroundFields {
            title: "New".to_string(),
            price: 40.0,
            description: "better".to_string(),
            location: "UT".to_string(),
            image: "http://x/z.jpg".to_string(),
        };
        let updated = store
            .update(created.id, replaced.clone())
            .await
            .unwrap()
            .expect("campground exists");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "New");
        assert_eq!(updated.price, 40.0);
    }

    #[tokio::test]
    async fn update_of_missing_id_is_none() {
        let store = MemStore::new();
        let result = store.update(Uuid::new_v4(), fields("X")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_is_true_once_then_false() {
        let store = MemStore::new();
        let created = store.create(fields("Gone Soon")).await.unwrap();

        assert!(store.delete(created.id).await.unwrap());
        assert!(!store.delete(created.id).await.unwrap());
        assert!(store.get(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn reviews_append_in_order_and_cascade_on_delete() {
        let store = MemStore::new();
        let camp = store.create(fields("Reviewed")).await.unwrap();

        store
            .add_review(camp.id, "first".to_string(), 4.0)
            .await
            .unwrap()
            .expect("campground exists");
        store
            .add_review(camp.id, "second".to_string(), 5.0)
            .await
            .unwrap()
            .expect("campground exists");

        let reviews = store.reviews_for(camp.id).await.unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].body, "first");
        assert_eq!(reviews[1].body, "second");
        assert!(reviews.iter().all(|r| r.campground_id == camp.id));

        store.delete(camp.id).await.unwrap();
        assert!(store.reviews_for(camp.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn review_for_missing_campground_is_none() {
        let store = MemStore::new();
        let result = store
            .add_review(Uuid::new_v4(), "orphan".to_string(), 3.0)
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
