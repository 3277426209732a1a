//! `reqwest`-backed [`ApiTransport`].

use crate::model::{
    Category, CategoryCreate, CategoryList, Credentials, LoginResponse, Product, ProductCreate,
    ProductEnvelope, ProductList, RegistrationInput, Role, RoleList, UserRecord,
};
use crate::transport::{ApiError, ApiTransport};
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};

const API_PREFIX: [&str; 2] = ["api", "v1"];

/// HTTP client for the storefront REST API.
///
/// # Example
/// ```rust,no_run
/// use shop_admin::transport::{ApiTransport, HttpTransport};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), shop_admin::transport::ApiError> {
/// let transport = HttpTransport::new("http://localhost:3000", Duration::from_secs(30))?;
/// let roles = transport.fetch_roles().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: Url,
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::Configuration(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Configuration(format!("{} cannot be a base URL", base_url)));
        }
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Configuration(e.to_string()))?;
        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/api/v1/{segments...}`, each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Configuration(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(API_PREFIX)
            .extend(segments);
        Ok(url)
    }

    /// Sends the request and turns non-2xx answers into [`ApiError::Status`].
    async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status.as_u16(), &body);
        warn!(status = status.as_u16(), error = %err, "Request rejected");
        Err(err)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let url = self.endpoint(segments)?;
        debug!(%url, "GET");
        let response = self.execute(self.http.get(url)).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    #[instrument(skip(self))]
    async fn register(&self, input: &RegistrationInput) -> Result<serde_json::Value, ApiError> {
        let url = self.endpoint(&["users"])?;
        let response = self.execute(self.http.post(url).json(input)).await?;
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    #[instrument(skip(self))]
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint(&["auth", "login"])?;
        let response = self.execute(self.http.post(url).json(credentials)).await?;
        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    #[instrument(skip(self))]
    async fn fetch_user(&self, id: &str) -> Result<UserRecord, ApiError> {
        self.get_json(&["users", id]).await
    }

    #[instrument(skip(self))]
    async fn fetch_roles(&self) -> Result<Vec<Role>, ApiError> {
        let list: RoleList = self.get_json(&["roles"]).await?;
        Ok(list.roles)
    }

    #[instrument(skip(self))]
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let list: CategoryList = self.get_json(&["categories"]).await?;
        Ok(list.categories)
    }

    #[instrument(skip(self, token))]
    async fn create_category(&self, input: &CategoryCreate, token: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["categories"])?;
        self.execute(self.http.post(url).bearer_auth(token).json(input))
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let list: ProductList = self.get_json(&["products"]).await?;
        Ok(list.products)
    }

    #[instrument(skip(self))]
    async fn get_product(&self, id: &str) -> Result<Product, ApiError> {
        let envelope: ProductEnvelope = self.get_json(&["products", id]).await?;
        Ok(envelope.into_product())
    }

    #[instrument(skip(self, token))]
    async fn create_product(&self, input: &ProductCreate, token: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["products"])?;
        self.execute(self.http.post(url).bearer_auth(token).json(input))
            .await?;
        Ok(())
    }
}
