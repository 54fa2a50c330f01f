use crate::api::{ApiClient, AUTH_FLAG_KEY, AUTH_TOKEN_KEY};
use crate::error::Result;
use crate::storage::get_typed;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};

#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub username: String,
    pub role: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: AuthUser,
}

/// Client-trust-only session stub: a stored token plus a boolean gate for the
/// admin UI. Auth calls have no offline fallback, failures propagate.
#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn login(&self, credentials: LoginCredentials) -> Result<AuthResponse> {
        let response: AuthResponse = self.client.post("/auth/login", &credentials).await?;

        let store = self.client.store();
        store.set(AUTH_TOKEN_KEY, &json!(response.token));
        store.set(AUTH_FLAG_KEY, &json!(true));
        info!(username = %response.user.username, "logged in");

        Ok(response)
    }

    /// The stored session is cleared even when the backend call fails.
    pub async fn logout(&self) {
        if let Err(e) = self.client.post::<serde_json::Value, _>("/auth/logout", &json!({})).await {
            error!(error = %e, "logout request failed");
        }
        let store = self.client.store();
        store.remove(AUTH_TOKEN_KEY);
        store.remove(AUTH_FLAG_KEY);
    }

    pub async fn current_user(&self) -> Result<AuthUser> {
        self.client.get("/auth/me").await
    }

    pub fn is_authenticated(&self) -> bool {
        get_typed::<bool>(self.client.store().as_ref(), AUTH_FLAG_KEY).unwrap_or(false)
    }
}
