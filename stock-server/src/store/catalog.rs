//! Product Catalog Store
//!
//! 商品目录：整文件读入 → 内存修改 → 整文件重写。
//!
//! The rewrite goes through a temp file in the same directory followed by a
//! rename, so a crash mid-write never leaves a truncated catalog behind.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use shared::models::{Product, ProductCreate, ProductUpdate};

use super::{DELIMITER, StoreError, StoreResult};

/// CSV-backed product catalog
pub struct CatalogStore {
    path: PathBuf,
    /// load → mutate → rewrite 必须互斥
    lock: Mutex<()>,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Read the whole catalog from disk, ordered by id ascending
    ///
    /// A missing backing file is an empty catalog, not an error.
    pub fn load_all(&self) -> StoreResult<Vec<Product>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(DELIMITER)
            .from_path(&self.path)?;

        let mut products: Vec<Product> = Vec::new();
        for record in reader.deserialize() {
            products.push(record?);
        }

        products.sort_by_key(|p| p.id);
        Ok(products)
    }

    /// Replace the whole backing file with the given products
    ///
    /// Write-to-temp-then-rename in the target directory (atomic replace).
    pub fn save_all(&self, products: &[Product]) -> StoreResult<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let tmp = tempfile::NamedTempFile::new_in(dir)?;

        {
            let mut writer = csv::WriterBuilder::new()
                .delimiter(DELIMITER)
                .from_writer(tmp.as_file());
            for product in products {
                writer.serialize(product)?;
            }
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;

        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }

    /// All products, ordered by id ascending
    pub fn list(&self) -> StoreResult<Vec<Product>> {
        self.load_all()
    }

    /// Single product by id
    pub fn get(&self, id: u32) -> StoreResult<Product> {
        self.load_all()?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("Product {}", id)))
    }

    /// Add a new product; the id is `max(existing ids) + 1` (1 if empty)
    pub fn add(&self, data: ProductCreate) -> StoreResult<Product> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut products = self.load_all()?;
        let new_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;

        let product = Product {
            id: new_id,
            name: data.name,
            price: data.price,
            quantity: data.quantity,
        };
        products.push(product.clone());
        self.save_all(&products)?;

        tracing::info!(
            target: "inventory",
            id = product.id,
            name = %product.name,
            quantity = product.quantity,
            "Product added"
        );
        Ok(product)
    }

    /// Replace name, price and quantity of an existing product
    pub fn update(&self, id: u32, data: ProductUpdate) -> StoreResult<Product> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut products = self.load_all()?;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("Product {}", id)))?;

        product.name = data.name;
        product.price = data.price;
        product.quantity = data.quantity;
        let updated = product.clone();

        self.save_all(&products)?;

        tracing::info!(target: "inventory", id, name = %updated.name, "Product updated");
        Ok(updated)
    }

    /// Remove a product
    pub fn delete(&self, id: u32) -> StoreResult<()> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut products = self.load_all()?;
        let before = products.len();
        products.retain(|p| p.id != id);

        if products.len() == before {
            return Err(StoreError::NotFound(format!("Product {}", id)));
        }

        self.save_all(&products)?;

        tracing::info!(target: "inventory", id, "Product deleted");
        Ok(())
    }

    /// Path of the backing file (used by diagnostics and tests)
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore")
            .field("path", &self.path)
            .finish()
    }
}
