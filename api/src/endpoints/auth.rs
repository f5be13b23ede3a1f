//! Authentication endpoints and session handling

use std::sync::Arc;

use tracing::info;

use fd_core::RawFailure;
use fd_infra::{ApiTransport, TokenStore};

use crate::dto::{LoginRequest, LoginResponse, RegisterRequest, UsuarioResponse};

#[derive(Debug, Clone)]
pub struct AuthApi {
    transport: Arc<ApiTransport>,
    tokens: TokenStore,
}

impl AuthApi {
    pub(crate) fn new(transport: Arc<ApiTransport>, tokens: TokenStore) -> Self {
        Self { transport, tokens }
    }

    /// Authenticate and store the issued token for subsequent requests
    pub async fn login(&self, credentials: &LoginRequest) -> Result<(), RawFailure> {
        let response: LoginResponse = self.transport.post("/auth/login", credentials).await?;
        self.tokens.set(response.token);
        info!(username = %credentials.username, "session established");
        Ok(())
    }

    pub async fn register(&self, payload: &RegisterRequest) -> Result<UsuarioResponse, RawFailure> {
        self.transport.post("/auth/register", payload).await
    }

    /// Drop the local session. The backend holds no session state, so
    /// logout is purely client-side.
    pub fn logout(&self) {
        self.tokens.clear();
        info!("session cleared");
    }

    pub fn is_authenticated(&self) -> bool {
        self.tokens.is_present()
    }
}
