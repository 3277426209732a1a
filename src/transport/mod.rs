//! # REST Transport
//!
//! The seam between the application and the remote API.
//!
//! [`ApiTransport`] lists every endpoint the front end consumes. [`HttpTransport`] is
//! the production implementation on top of `reqwest`; tests substitute their own.

pub mod error;
pub mod http;

pub use error::*;
pub use http::*;

use crate::model::{
    Category, CategoryCreate, Credentials, LoginResponse, Product, ProductCreate,
    RegistrationInput, Role, UserRecord,
};
use async_trait::async_trait;

/// Every REST call the front end makes.
///
/// Writes to the catalog take the bearer token explicitly; the transport itself
/// holds no session state.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// `POST /api/v1/users`
    async fn register(&self, input: &RegistrationInput) -> Result<serde_json::Value, ApiError>;

    /// `POST /api/v1/auth/login`
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// `GET /api/v1/users/{id}`
    async fn fetch_user(&self, id: &str) -> Result<UserRecord, ApiError>;

    /// `GET /api/v1/roles`
    async fn fetch_roles(&self) -> Result<Vec<Role>, ApiError>;

    /// `GET /api/v1/categories`
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;

    /// `POST /api/v1/categories`
    async fn create_category(&self, input: &CategoryCreate, token: &str) -> Result<(), ApiError>;

    /// `GET /api/v1/products`
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// `GET /api/v1/products/{id}`
    async fn get_product(&self, id: &str) -> Result<Product, ApiError>;

    /// `POST /api/v1/products`
    async fn create_product(&self, input: &ProductCreate, token: &str) -> Result<(), ApiError>;
}
