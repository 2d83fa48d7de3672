mod memory;
mod postgres;

use crate::model::product::Product;
use shared::abstract_trait::Repository;
use std::sync::Arc;

pub use self::memory::InMemoryProductRepository;
pub use self::postgres::ProductRepository;

pub type DynProductRepository = Arc<dyn Repository<Product, i32> + Send + Sync>;
