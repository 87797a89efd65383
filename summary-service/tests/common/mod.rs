use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::JwtHandler;
use summary_service::domain::summary::errors::SummaryError;
use summary_service::domain::summary::ports::SummarizerClient;
use summary_service::domain::summary::service::SummaryService;
use summary_service::domain::user::models::User;
use summary_service::domain::user::models::UserId;
use summary_service::domain::user::ports::UserRepository;
use summary_service::domain::user::service::UserService;
use summary_service::inbound::http::router::create_router;
use summary_service::user::errors::UserError;
use uuid::Uuid;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-32-bytes";
pub const TOKEN_TTL_MINUTES: i64 = 30;

/// User store backed by a mutex-guarded map, enforcing the same email
/// uniqueness rule as the Postgres unique index.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<Uuid, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyRegistered);
        }
        users.insert(user.id.0, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.get(&id.0).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.values().find(|u| u.email.as_str() == email).cloned())
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if !users.contains_key(&user.id.0) {
            return Err(UserError::NotFound(user.id.to_string()));
        }
        if users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(UserError::EmailAlreadyRegistered);
        }
        users.insert(user.id.0, user.clone());
        Ok(user)
    }
}

/// Summarizer that echoes a canned summary without any network call.
pub struct StubSummarizer;

#[async_trait]
impl SummarizerClient for StubSummarizer {
    async fn summarize(&self, _text: &str) -> Result<String, SummaryError> {
        Ok("A concise summary.".to_string())
    }
}

/// Test application serving the real router on a random local port.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_service = Arc::new(UserService::new(Arc::new(
            InMemoryUserRepository::default(),
        )));
        let summary_service = Arc::new(SummaryService::new(Arc::new(StubSummarizer)));
        let authenticator = Arc::new(Authenticator::new(JWT_SECRET));

        let application = create_router(
            user_service,
            summary_service,
            authenticator,
            TOKEN_TTL_MINUTES,
        );

        tokio::spawn(async move {
            axum::serve(listener, application)
                .await
                .expect("Server failed");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(JWT_SECRET),
        }
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    /// Register a user and return the response body.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> serde_json::Value {
        let response = self
            .post("/auth/register")
            .json(&serde_json::json!({
                "name": name,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert!(
            response.status().is_success(),
            "registration failed: {}",
            response.status()
        );
        response.json().await.expect("Failed to parse response")
    }

    /// Log in and return the access token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/auth/login")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert!(
            response.status().is_success(),
            "login failed: {}",
            response.status()
        );
        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["access_token"].as_str().expect("no token").to_string()
    }
}
