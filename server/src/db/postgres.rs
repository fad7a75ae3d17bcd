// server/src/db/postgres.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kennel::{Gender, KennelError, KennelResult, Puppy, Store, Visitor};
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool};
use tracing::{error, info, instrument};
use uuid::Uuid;

const SCHEMA: &str = include_str!("../../schema.sql");

const PUPPY_COLUMNS: &str = "id, name, breed, age, weight, gender, price, color, description, images, \
   is_available, health_status, is_vaccinated, is_insured, free_delivery";

const VISITOR_COLUMNS: &str = "id, ip_address, user_agent, country, city, visit_time, page_visited";

#[derive(Debug, FromRow)]
struct PuppyRow {
  id: Uuid,
  name: String,
  breed: String,
  age: String,
  weight: String,
  gender: String,
  price: i32,
  color: String,
  description: Option<String>,
  images: Vec<String>,
  is_available: bool,
  health_status: String,
  is_vaccinated: bool,
  is_insured: bool,
  free_delivery: bool,
}

impl PuppyRow {
  fn into_puppy(self) -> KennelResult<Puppy> {
    // A row the CHECK constraint should have rejected is a store fault, not bad input.
    let gender = self.gender.parse::<Gender>().map_err(|e: KennelError| {
      error!(puppy_id = %self.id, error = %e, "Corrupt gender in stored puppy row");
      KennelError::Store {
        source: anyhow::anyhow!("corrupt puppy row {}: {}", self.id, e),
      }
    })?;
    Ok(Puppy {
      id: self.id,
      name: self.name,
      breed: self.breed,
      age: self.age,
      weight: self.weight,
      gender,
      price: self.price,
      color: self.color,
      description: self.description,
      images: self.images,
      is_available: self.is_available,
      health_status: self.health_status,
      is_vaccinated: self.is_vaccinated,
      is_insured: self.is_insured,
      free_delivery: self.free_delivery,
    })
  }
}

#[derive(Debug, FromRow)]
struct VisitorRow {
  id: Uuid,
  ip_address: String,
  user_agent: Option<String>,
  country: Option<String>,
  city: Option<String>,
  visit_time: DateTime<Utc>,
  page_visited: String,
}

impl From<VisitorRow> for Visitor {
  fn from(row: VisitorRow) -> Self {
    Visitor {
      id: row.id,
      ip_address: row.ip_address,
      user_agent: row.user_agent,
      country: row.country,
      city: row.city,
      visit_time: row.visit_time,
      page_visited: row.page_visited,
    }
  }
}

fn store_error(e: sqlx::Error) -> KennelError {
  error!("Database operation failed: {}", e);
  KennelError::Store {
    source: anyhow::Error::new(e),
  }
}

/// `Store` over a PostgreSQL pool, using runtime-checked queries.
#[derive(Clone)]
pub struct PgStore {
  pool: PgPool,
}

impl PgStore {
  pub fn from_pool(pool: PgPool) -> Self {
    Self { pool }
  }

  pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
    let pool = PgPoolOptions::new()
      .max_connections(max_connections)
      .connect(database_url)
      .await?;
    Ok(Self::from_pool(pool))
  }

  /// Creates the tables if they do not exist yet.
  #[instrument(name = "pg_store::migrate", skip(self), err(Display))]
  pub async fn migrate(&self) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
    info!("Database schema is up to date.");
    Ok(())
  }
}

#[async_trait]
impl Store for PgStore {
  async fn list_puppies(&self) -> KennelResult<Vec<Puppy>> {
    let rows: Vec<PuppyRow> = sqlx::query_as(&format!(
      "SELECT {} FROM puppies ORDER BY created_at ASC, id ASC",
      PUPPY_COLUMNS
    ))
    .fetch_all(&self.pool)
    .await
    .map_err(store_error)?;
    rows.into_iter().map(PuppyRow::into_puppy).collect()
  }

  async fn get_puppy(&self, id: Uuid) -> KennelResult<Option<Puppy>> {
    let row: Option<PuppyRow> = sqlx::query_as(&format!("SELECT {} FROM puppies WHERE id = $1", PUPPY_COLUMNS))
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(store_error)?;
    row.map(PuppyRow::into_puppy).transpose()
  }

  async fn count_puppies(&self) -> KennelResult<usize> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM puppies")
      .fetch_one(&self.pool)
      .await
      .map_err(store_error)?;
    Ok(count.max(0) as usize)
  }

  async fn insert_puppy(&self, puppy: Puppy) -> KennelResult<()> {
    sqlx::query(&format!(
      "INSERT INTO puppies ({}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)",
      PUPPY_COLUMNS
    ))
    .bind(puppy.id)
    .bind(&puppy.name)
    .bind(&puppy.breed)
    .bind(&puppy.age)
    .bind(&puppy.weight)
    .bind(puppy.gender.as_str())
    .bind(puppy.price)
    .bind(&puppy.color)
    .bind(&puppy.description)
    .bind(&puppy.images)
    .bind(puppy.is_available)
    .bind(&puppy.health_status)
    .bind(puppy.is_vaccinated)
    .bind(puppy.is_insured)
    .bind(puppy.free_delivery)
    .execute(&self.pool)
    .await
    .map_err(store_error)?;
    Ok(())
  }

  async fn replace_puppy(&self, puppy: &Puppy) -> KennelResult<bool> {
    let result = sqlx::query(
      "UPDATE puppies SET name = $2, breed = $3, age = $4, weight = $5, gender = $6, price = $7, color = $8, \
       description = $9, images = $10, is_available = $11, health_status = $12, is_vaccinated = $13, \
       is_insured = $14, free_delivery = $15 WHERE id = $1",
    )
    .bind(puppy.id)
    .bind(&puppy.name)
    .bind(&puppy.breed)
    .bind(&puppy.age)
    .bind(&puppy.weight)
    .bind(puppy.gender.as_str())
    .bind(puppy.price)
    .bind(&puppy.color)
    .bind(&puppy.description)
    .bind(&puppy.images)
    .bind(puppy.is_available)
    .bind(&puppy.health_status)
    .bind(puppy.is_vaccinated)
    .bind(puppy.is_insured)
    .bind(puppy.free_delivery)
    .execute(&self.pool)
    .await
    .map_err(store_error)?;
    Ok(result.rows_affected() > 0)
  }

  async fn delete_puppy(&self, id: Uuid) -> KennelResult<bool> {
    let result = sqlx::query("DELETE FROM puppies WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(store_error)?;
    Ok(result.rows_affected() > 0)
  }

  async fn insert_visitor(&self, visitor: Visitor) -> KennelResult<()> {
    sqlx::query(&format!(
      "INSERT INTO visitors ({}) VALUES ($1, $2, $3, $4, $5, $6, $7)",
      VISITOR_COLUMNS
    ))
    .bind(visitor.id)
    .bind(&visitor.ip_address)
    .bind(&visitor.user_agent)
    .bind(&visitor.country)
    .bind(&visitor.city)
    .bind(visitor.visit_time)
    .bind(&visitor.page_visited)
    .execute(&self.pool)
    .await
    .map_err(store_error)?;
    Ok(())
  }

  async fn list_visitors(&self) -> KennelResult<Vec<Visitor>> {
    let rows: Vec<VisitorRow> = sqlx::query_as(&format!(
      "SELECT {} FROM visitors ORDER BY visit_time DESC",
      VISITOR_COLUMNS
    ))
    .fetch_all(&self.pool)
    .await
    .map_err(store_error)?;
    Ok(rows.into_iter().map(Visitor::from).collect())
  }

  async fn delete_visitor(&self, id: Uuid) -> KennelResult<bool> {
    let result = sqlx::query("DELETE FROM visitors WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(store_error)?;
    Ok(result.rows_affected() > 0)
  }
}
