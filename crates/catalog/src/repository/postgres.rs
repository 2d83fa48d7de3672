use crate::model::product::Product;
use async_trait::async_trait;
use shared::{abstract_trait::Repository, config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductRepository {
    db: ConnectionPool,
}

impl ProductRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<Product, i32> for ProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        info!("🔍 Fetching all products");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT product_id, name, price, stock, color
            FROM products
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(products)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        info!("🆔 Fetching product by ID: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Product>(
            r#"
            SELECT product_id, name, price, stock, color
            FROM products
            WHERE product_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn create(&self, entity: &Product) -> Result<Product, RepositoryError> {
        info!("📦 Creating product: {}", entity.name);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let created = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, price, stock, color)
            VALUES ($1, $2, $3, $4)
            RETURNING product_id, name, price, stock, color
            "#,
        )
        .bind(&entity.name)
        .bind(entity.price)
        .bind(entity.stock)
        .bind(&entity.color)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to create product: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("✅ Created product with ID: {}", created.product_id);

        Ok(created)
    }

    async fn update(&self, entity: &Product) -> Result<(), RepositoryError> {
        info!("✏️ Updating product ID: {}", entity.product_id);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        // Full-record replace; zero matched rows is not an error here.
        sqlx::query(
            r#"
            UPDATE products
            SET name = $2, price = $3, stock = $4, color = $5
            WHERE product_id = $1
            "#,
        )
        .bind(entity.product_id)
        .bind(&entity.name)
        .bind(entity.price)
        .bind(entity.stock)
        .bind(&entity.color)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update product: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(())
    }

    async fn delete(&self, entity: &Product) -> Result<(), RepositoryError> {
        info!("🗑️ Deleting product ID: {}", entity.product_id);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        sqlx::query(
            r#"
            DELETE FROM products
            WHERE product_id = $1
            "#,
        )
        .bind(entity.product_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete product: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(())
    }
}
