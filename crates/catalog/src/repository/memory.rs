use crate::model::product::Product;
use async_trait::async_trait;
use shared::{abstract_trait::Repository, errors::RepositoryError};
use std::{
    collections::BTreeMap,
    sync::atomic::{AtomicI32, Ordering},
};
use tokio::sync::RwLock;

/// Map-backed repository, keyed by id. Serves the tests and any store-less
/// embedding; create always assigns the next key, so a submitted id is
/// ignored the same way the relational store ignores it.
#[derive(Default)]
pub struct InMemoryProductRepository {
    rows: RwLock<BTreeMap<i32, Product>>,
    next_id: AtomicI32,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI32::new(1),
        }
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let rows: BTreeMap<i32, Product> = products
            .into_iter()
            .map(|p| (p.product_id, p))
            .collect();

        let next_id = rows.keys().next_back().copied().unwrap_or(0) + 1;

        Self {
            rows: RwLock::new(rows),
            next_id: AtomicI32::new(next_id),
        }
    }
}

#[async_trait]
impl Repository<Product, i32> for InMemoryProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = self.rows.read().await;
        Ok(rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let rows = self.rows.read().await;
        Ok(rows.get(&id).cloned())
    }

    async fn create(&self, entity: &Product) -> Result<Product, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);

        let created = Product {
            product_id: id,
            ..entity.clone()
        };

        let mut rows = self.rows.write().await;
        rows.insert(id, created.clone());

        Ok(created)
    }

    async fn update(&self, entity: &Product) -> Result<(), RepositoryError> {
        let mut rows = self.rows.write().await;

        // Replace-by-id; an absent row is a silent zero-row update, matching
        // the relational implementation.
        if let Some(row) = rows.get_mut(&entity.product_id) {
            *row = entity.clone();
        }

        Ok(())
    }

    async fn delete(&self, entity: &Product) -> Result<(), RepositoryError> {
        let mut rows = self.rows.write().await;
        rows.remove(&entity.product_id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn pencil() -> Product {
        Product {
            product_id: 1,
            name: "Pencil".into(),
            price: Decimal::new(10000, 2),
            stock: 50,
            color: "Red".into(),
        }
    }

    fn notebook() -> Product {
        Product {
            product_id: 2,
            name: "Notebook".into(),
            price: Decimal::new(20000, 2),
            stock: 500,
            color: "Blue".into(),
        }
    }

    #[tokio::test]
    async fn empty_store_yields_empty_vec() {
        let repo = InMemoryProductRepository::new();

        assert_eq!(repo.get_all().await.unwrap(), vec![]);
        assert_eq!(repo.get_by_id(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn seeded_store_is_queryable() {
        let repo = InMemoryProductRepository::with_products([pencil(), notebook()]);

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);

        let found = repo.get_by_id(1).await.unwrap().unwrap();
        assert_eq!(found, pencil());

        assert_eq!(repo.get_by_id(3).await.unwrap(), None);
    }

    #[tokio::test]
    async fn create_assigns_the_next_key_and_round_trips() {
        let repo = InMemoryProductRepository::with_products([pencil(), notebook()]);

        let unsaved = Product {
            product_id: 0,
            name: "Eraser".into(),
            price: Decimal::new(5000, 2),
            stock: 25,
            color: "White".into(),
        };

        let created = repo.create(&unsaved).await.unwrap();
        assert_eq!(created.product_id, 3);

        let fetched = repo.get_by_id(created.product_id).await.unwrap().unwrap();
        assert_eq!(fetched.name, unsaved.name);
        assert_eq!(fetched.price, unsaved.price);
        assert_eq!(fetched.stock, unsaved.stock);
        assert_eq!(fetched.color, unsaved.color);
    }

    #[tokio::test]
    async fn update_replaces_the_full_record() {
        let repo = InMemoryProductRepository::with_products([pencil()]);

        let replacement = Product {
            name: "Mechanical Pencil".into(),
            stock: 10,
            ..pencil()
        };

        repo.update(&replacement).await.unwrap();

        let fetched = repo.get_by_id(1).await.unwrap().unwrap();
        assert_eq!(fetched, replacement);
    }

    #[tokio::test]
    async fn update_of_a_missing_row_is_a_no_op() {
        let repo = InMemoryProductRepository::with_products([pencil()]);

        let ghost = Product {
            product_id: 99,
            ..notebook()
        };

        repo.update(&ghost).await.unwrap();

        assert_eq!(repo.get_all().await.unwrap().len(), 1);
        assert_eq!(repo.get_by_id(99).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_twice_observes_absence_the_second_time() {
        let repo = InMemoryProductRepository::with_products([pencil()]);

        let entity = repo.get_by_id(1).await.unwrap().unwrap();
        repo.delete(&entity).await.unwrap();
        assert_eq!(repo.get_by_id(1).await.unwrap(), None);

        // Second pass takes the not-found path; no error surfaces.
        assert!(repo.get_by_id(1).await.unwrap().is_none());
        repo.delete(&entity).await.unwrap();
    }
}
