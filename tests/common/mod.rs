#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use shop_admin::model::{
    Category, CategoryCreate, Credentials, LoginResponse, Product, ProductCreate,
    RegistrationInput, Role, UserRecord,
};
use shop_admin::token_store::{TokenStore, TokenStoreError};
use shop_admin::transport::{ApiError, ApiTransport};
use std::collections::HashMap;
use std::time::Duration;

/// In-process [`ApiTransport`] with canned answers and a call log.
pub struct ScriptedTransport {
    register: Mutex<Result<serde_json::Value, ApiError>>,
    login: Mutex<Result<LoginResponse, ApiError>>,
    logins_by_user: Mutex<HashMap<String, (Duration, Result<LoginResponse, ApiError>)>>,
    user: Mutex<Result<UserRecord, ApiError>>,
    roles: Mutex<Result<Vec<Role>, ApiError>>,
    categories: Mutex<Result<Vec<Category>, ApiError>>,
    products: Mutex<Result<Vec<Product>, ApiError>>,
    writes: Mutex<Result<(), ApiError>>,
    roles_delay: Mutex<Duration>,
    calls: Mutex<Vec<String>>,
    bearers: Mutex<Vec<String>>,
}

impl Default for ScriptedTransport {
    fn default() -> Self {
        Self {
            register: Mutex::new(Ok(serde_json::json!({ "message": "created" }))),
            login: Mutex::new(Ok(login_response("alice", "42", "tok-1"))),
            logins_by_user: Mutex::new(HashMap::new()),
            user: Mutex::new(Ok(alice())),
            roles: Mutex::new(Ok(roles())),
            categories: Mutex::new(Ok(Vec::new())),
            products: Mutex::new(Ok(Vec::new())),
            writes: Mutex::new(Ok(())),
            roles_delay: Mutex::new(Duration::ZERO),
            calls: Mutex::new(Vec::new()),
            bearers: Mutex::new(Vec::new()),
        }
    }
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_register(self, result: Result<serde_json::Value, ApiError>) -> Self {
        *self.register.lock() = result;
        self
    }

    pub fn with_login(self, result: Result<LoginResponse, ApiError>) -> Self {
        *self.login.lock() = result;
        self
    }

    /// Answers logins of `username` with `result` after `delay`.
    pub fn with_login_for(
        self,
        username: &str,
        delay: Duration,
        result: Result<LoginResponse, ApiError>,
    ) -> Self {
        self.logins_by_user
            .lock()
            .insert(username.to_string(), (delay, result));
        self
    }

    pub fn with_user(self, result: Result<UserRecord, ApiError>) -> Self {
        *self.user.lock() = result;
        self
    }

    pub fn with_roles(self, result: Result<Vec<Role>, ApiError>) -> Self {
        *self.roles.lock() = result;
        self
    }

    pub fn with_products(self, result: Result<Vec<Product>, ApiError>) -> Self {
        *self.products.lock() = result;
        self
    }

    pub fn with_writes(self, result: Result<(), ApiError>) -> Self {
        *self.writes.lock() = result;
        self
    }

    /// Holds every roles response back by `delay`.
    pub fn with_roles_delay(self, delay: Duration) -> Self {
        *self.roles_delay.lock() = delay;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn bearers(&self) -> Vec<String> {
        self.bearers.lock().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().push(call.into());
    }
}

#[async_trait]
impl ApiTransport for ScriptedTransport {
    async fn register(&self, input: &RegistrationInput) -> Result<serde_json::Value, ApiError> {
        self.record(format!("register {}", input.username));
        self.register.lock().clone()
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.record(format!("login {}", credentials.username));
        let scripted = self.logins_by_user.lock().get(&credentials.username).cloned();
        match scripted {
            Some((delay, result)) => {
                tokio::time::sleep(delay).await;
                result
            }
            None => self.login.lock().clone(),
        }
    }

    async fn fetch_user(&self, id: &str) -> Result<UserRecord, ApiError> {
        self.record(format!("fetch_user {}", id));
        self.user.lock().clone()
    }

    async fn fetch_roles(&self) -> Result<Vec<Role>, ApiError> {
        self.record("fetch_roles");
        let delay = *self.roles_delay.lock();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.roles.lock().clone()
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.record("list_categories");
        self.categories.lock().clone()
    }

    async fn create_category(&self, input: &CategoryCreate, token: &str) -> Result<(), ApiError> {
        self.record(format!("create_category {}", input.name));
        self.bearers.lock().push(token.to_string());
        self.writes.lock().clone()
    }

    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.record("list_products");
        self.products.lock().clone()
    }

    async fn get_product(&self, id: &str) -> Result<Product, ApiError> {
        self.record(format!("get_product {}", id));
        let products = self.products.lock().clone()?;
        products
            .into_iter()
            .find(|p| p.id.as_deref() == Some(id))
            .ok_or_else(|| ApiError::from_status(404, r#"{"message": "Product not found"}"#))
    }

    async fn create_product(&self, input: &ProductCreate, token: &str) -> Result<(), ApiError> {
        self.record(format!("create_product {}", input.code));
        self.bearers.lock().push(token.to_string());
        self.writes.lock().clone()
    }
}

/// Token store that reads fine but cannot be written.
#[derive(Default)]
pub struct ReadOnlyTokenStore;

impl TokenStore for ReadOnlyTokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, TokenStoreError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), TokenStoreError> {
        Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only file system").into())
    }

    fn remove(&self, _key: &str) -> Result<(), TokenStoreError> {
        Ok(())
    }
}

pub fn alice() -> UserRecord {
    UserRecord {
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        display_name: "Alice".to_string(),
        role: "r-admin".to_string(),
    }
}

pub fn roles() -> Vec<Role> {
    vec![
        Role { id: "r-admin".to_string(), name: "Admin".to_string() },
        Role { id: "r-user".to_string(), name: "User".to_string() },
    ]
}

pub fn login_response(username: &str, user_id: &str, token: &str) -> LoginResponse {
    LoginResponse {
        token: token.to_string(),
        user: UserRecord::new(username),
        user_id: user_id.to_string(),
    }
}

pub fn valid_registration() -> RegistrationInput {
    RegistrationInput {
        display_name: "Alice Liddell".to_string(),
        email: "alice@gmail.com".to_string(),
        username: "alice".to_string(),
        password: "Secret#123".to_string(),
        role: "r-user".to_string(),
    }
}

pub fn valid_product() -> ProductCreate {
    ProductCreate {
        code: "LMP001".to_string(),
        name: "Desk Lamp".to_string(),
        excerpt: "Warm light for late nights".to_string(),
        description: "An adjustable desk lamp with a warm LED.".to_string(),
        category: "c-lighting".to_string(),
        price: Some(24.99),
        status: true,
    }
}
