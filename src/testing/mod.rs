// testing/mod.rs - In-process harness for router tests
//
// Drives the full router (session middleware and login gate included)
// with `tower::ServiceExt::oneshot` over a fresh `MemoryStore`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use crate::config::{AppConfig, StoreBackend};
use crate::database::models::{Cat, CatChanges, Feeding, NewCat, NewFeeding, NewToy, NewUser, Toy, User};
use crate::database::{MemoryStore, Store, StoreError};
use crate::state::AppState;

pub struct TestApp {
    router: Router,
    pub store: Arc<dyn Store>,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers.get(header::LOCATION).and_then(|v| v.to_str().ok())
    }

    /// `sessionid=<token>` from Set-Cookie, ready to send back as a Cookie header
    pub fn session_cookie(&self) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|v| v.split(';').next())
            .find(|pair| pair.starts_with("sessionid=") && pair.len() > "sessionid=".len())
            .map(str::to_string)
    }
}

/// bcrypt's lowest accepted work factor
pub const TEST_HASH_COST: u32 = 4;

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::development();
    config.database.backend = StoreBackend::Memory;
    config.security.session_secret = "test-session-secret".to_string();
    config.security.password_hash_cost = TEST_HASH_COST;
    config
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self::with_store(config, Arc::new(MemoryStore::new()))
    }

    pub fn with_store(config: AppConfig, store: Arc<dyn Store>) -> Self {
        let router = crate::app(AppState::new(store.clone(), config));
        Self { router, store }
    }

    pub async fn get(&self, path: &str, cookie: Option<&str>) -> TestResponse {
        let mut request = Request::get(path);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        self.send(request.body(Body::empty()).unwrap()).await
    }

    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)], cookie: Option<&str>) -> TestResponse {
        let mut request = Request::post(path).header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        self.send(request.body(Body::from(encode_form(fields))).unwrap()).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    /// Sign up a new user and return their session cookie
    pub async fn signup(&self, username: &str) -> String {
        let password = "purr-purr-42";
        let res = self
            .post_form(
                "/accounts/signup/",
                &[("username", username), ("password1", password), ("password2", password)],
                None,
            )
            .await;
        assert_eq!(res.status, StatusCode::SEE_OTHER, "signup failed: {}", res.body);
        res.session_cookie().expect("signup sets a session cookie")
    }

    /// Create a cat through the form and return the stored row
    pub async fn create_cat(&self, cookie: &str, name: &str, breed: &str, age: &str) -> Cat {
        let res = self
            .post_form(
                "/cats/create/",
                &[("name", name), ("breed", breed), ("description", "Sleeps a lot"), ("age", age)],
                Some(cookie),
            )
            .await;
        assert_eq!(res.status, StatusCode::SEE_OTHER, "create failed: {}", res.body);

        let id: i64 = res
            .location()
            .and_then(|loc| loc.trim_start_matches("/cats/").trim_end_matches('/').parse().ok())
            .expect("redirect to the new cat");
        self.store.find_cat(id).await.unwrap().expect("cat was stored")
    }
}

fn encode_form(fields: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish()
}

/// `MemoryStore` that can be switched into failing every call with a
/// connection error, as a Postgres store does when the pool is gone.
#[derive(Default)]
pub struct SwitchableStore {
    inner: MemoryStore,
    offline: AtomicBool,
}

impl SwitchableStore {
    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::ConnectionError("pool timed out".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Store for SwitchableStore {
    async fn health_check(&self) -> Result<(), StoreError> {
        self.check()?;
        self.inner.health_check().await
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        self.check()?;
        self.inner.create_user(user).await
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        self.check()?;
        self.inner.find_user(id).await
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        self.check()?;
        self.inner.find_user_by_username(username).await
    }

    async fn list_cats_for_owner(&self, owner_id: i64) -> Result<Vec<Cat>, StoreError> {
        self.check()?;
        self.inner.list_cats_for_owner(owner_id).await
    }

    async fn find_cat(&self, id: i64) -> Result<Option<Cat>, StoreError> {
        self.check()?;
        self.inner.find_cat(id).await
    }

    async fn find_cat_owned(&self, id: i64, owner_id: i64) -> Result<Option<Cat>, StoreError> {
        self.check()?;
        self.inner.find_cat_owned(id, owner_id).await
    }

    async fn create_cat(&self, owner_id: i64, cat: NewCat) -> Result<Cat, StoreError> {
        self.check()?;
        self.inner.create_cat(owner_id, cat).await
    }

    async fn update_cat(&self, id: i64, changes: CatChanges) -> Result<Option<Cat>, StoreError> {
        self.check()?;
        self.inner.update_cat(id, changes).await
    }

    async fn delete_cat(&self, id: i64) -> Result<bool, StoreError> {
        self.check()?;
        self.inner.delete_cat(id).await
    }

    async fn list_feedings(&self, cat_id: i64) -> Result<Vec<Feeding>, StoreError> {
        self.check()?;
        self.inner.list_feedings(cat_id).await
    }

    async fn add_feeding(&self, cat_id: i64, feeding: NewFeeding) -> Result<Feeding, StoreError> {
        self.check()?;
        self.inner.add_feeding(cat_id, feeding).await
    }

    async fn list_toys(&self) -> Result<Vec<Toy>, StoreError> {
        self.check()?;
        self.inner.list_toys().await
    }

    async fn find_toy(&self, id: i64) -> Result<Option<Toy>, StoreError> {
        self.check()?;
        self.inner.find_toy(id).await
    }

    async fn create_toy(&self, toy: NewToy) -> Result<Toy, StoreError> {
        self.check()?;
        self.inner.create_toy(toy).await
    }

    async fn update_toy(&self, id: i64, toy: NewToy) -> Result<Option<Toy>, StoreError> {
        self.check()?;
        self.inner.update_toy(id, toy).await
    }

    async fn delete_toy(&self, id: i64) -> Result<bool, StoreError> {
        self.check()?;
        self.inner.delete_toy(id).await
    }

    async fn list_cat_toys(&self, cat_id: i64) -> Result<Vec<Toy>, StoreError> {
        self.check()?;
        self.inner.list_cat_toys(cat_id).await
    }

    async fn associate_toy(&self, cat_id: i64, toy_id: i64) -> Result<(), StoreError> {
        self.check()?;
        self.inner.associate_toy(cat_id, toy_id).await
    }

    async fn dissociate_toy(&self, cat_id: i64, toy_id: i64) -> Result<(), StoreError> {
        self.check()?;
        self.inner.dissociate_toy(cat_id, toy_id).await
    }
}
