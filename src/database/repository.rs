use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::product::Product;
use crate::database::models::user::User;
use crate::database::query_builder::QueryBuilder;
use crate::database::DatabaseError;
use crate::filter::FilterData;
use crate::validation::product::{CreateProduct, UpdateProduct};

const PRODUCTS_TABLE: &str = "products";

/// Product persistence. Fixed-shape statements run directly; filtered reads
/// go through the query builder.
#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, owner: Uuid, product: &CreateProduct) -> Result<Product, DatabaseError> {
        let row = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, description, price, stock, category, user_id) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.price)
        .bind(&product.stock)
        .bind(&product.category)
        .bind(owner)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Fetch a product visible to `owner`; owned by someone else means absent
    pub async fn find_owned(&self, owner: Uuid, id: i64) -> Result<Option<Product>, DatabaseError> {
        let row = sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE user_id = $1 AND id = $2",
        )
        .bind(owner)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn count_owned(&self, owner: Uuid, id: i64) -> Result<i64, DatabaseError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM products WHERE user_id = $1 AND id = $2",
        )
        .bind(owner)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    /// Overwrite all mutable fields by id. Ownership must already have been
    /// verified; id and user_id are never altered.
    pub async fn update(&self, product: &UpdateProduct) -> Result<Product, DatabaseError> {
        let row = sqlx::query_as::<_, Product>(
            "UPDATE products SET name = $1, description = $2, price = $3, stock = $4, \
             category = $5, updated_at = now() WHERE id = $6 RETURNING *",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.price)
        .bind(&product.stock)
        .bind(&product.category)
        .bind(product.id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn select(&self, filter: FilterData) -> Result<Vec<Product>, DatabaseError> {
        QueryBuilder::<Product>::new(PRODUCTS_TABLE)?
            .filter(filter)?
            .select_all(&self.pool)
            .await
    }

    pub async fn count(&self, filter: FilterData) -> Result<i64, DatabaseError> {
        QueryBuilder::<Product>::new(PRODUCTS_TABLE)?
            .filter(filter)?
            .count(&self.pool)
            .await
    }
}

/// Account persistence for the auth surface
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        let row = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn username_taken(&self, username: &str) -> Result<bool, DatabaseError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = $1")
            .bind(username)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    pub async fn insert(&self, username: &str, auth: &str) -> Result<User, DatabaseError> {
        let row = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, auth) VALUES ($1, $2) RETURNING *",
        )
        .bind(username)
        .bind(auth)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
