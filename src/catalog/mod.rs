//! # Catalog Client
//!
//! Product and category operations of the admin views. Reads are public; writes carry
//! the stored bearer token and report their outcome as a [`Notification`].
//!
//! Unlike the session operations, catalog calls do not go through the session store:
//! the admin views own their product tables locally.

pub mod error;
pub mod filter;

pub use error::*;
pub use filter::*;

use crate::model::{Category, CategoryCreate, Product, ProductCreate};
use crate::notify::{Notification, Notifier};
use crate::token_store::TokenStore;
use crate::transport::ApiTransport;
use crate::validation::Validate;
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub const CATEGORY_ADDED: &str = "Category added successfully!";
pub const CATEGORY_FAILED: &str = "Error adding category.";
pub const PRODUCT_ADDED: &str = "Product successfully added!";
pub const PRODUCT_FAILED: &str = "Failed to add product.";

#[derive(Clone)]
pub struct CatalogClient {
    transport: Arc<dyn ApiTransport>,
    tokens: Arc<dyn TokenStore>,
    notifier: Arc<dyn Notifier>,
}

impl CatalogClient {
    pub fn new(
        transport: Arc<dyn ApiTransport>,
        tokens: Arc<dyn TokenStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            transport,
            tokens,
            notifier,
        }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.transport.list_products().await?)
    }

    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        Ok(self.transport.list_categories().await?)
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> Result<Product, CatalogError> {
        Ok(self.transport.get_product(id).await?)
    }

    /// Lists products and applies [`filter_products`].
    pub async fn search_products(
        &self,
        search: &str,
        status: StatusFilter,
    ) -> Result<Vec<Product>, CatalogError> {
        let products = self.list_products().await?;
        Ok(filter_products(&products, search, status)
            .into_iter()
            .cloned()
            .collect())
    }

    fn bearer(&self) -> Result<String, CatalogError> {
        self.tokens.token()?.ok_or(CatalogError::Unauthenticated)
    }

    #[instrument(skip(self))]
    pub async fn create_category(&self, input: CategoryCreate) -> Result<(), CatalogError> {
        input.validate()?;
        let token = self.bearer()?;

        match self.transport.create_category(&input, &token).await {
            Ok(()) => {
                info!(name = %input.name, "Category created");
                self.notifier.notify(Notification::success(CATEGORY_ADDED));
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Error adding category");
                self.notifier.notify(Notification::error(CATEGORY_FAILED));
                Err(e.into())
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, input: ProductCreate) -> Result<(), CatalogError> {
        input.validate()?;
        let token = self.bearer()?;

        match self.transport.create_product(&input, &token).await {
            Ok(()) => {
                info!(code = %input.code, name = %input.name, "Product created");
                self.notifier.notify(Notification::success(PRODUCT_ADDED));
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Error adding product");
                self.notifier.notify(Notification::error(PRODUCT_FAILED));
                Err(e.into())
            }
        }
    }
}
