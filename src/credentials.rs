use crate::types::user::UserInfo;
use async_trait::async_trait;
use log::info;
use std::sync::RwLock;

/// Source of fresh user tokens, for callers that can mint them on demand.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn fetch_token(&self) -> Result<String, anyhow::Error>;
}

/// Identity shared by the signaling socket and the RPC client.
///
/// The token can be rotated at any time; readers always get a whole value,
/// never a torn one.
#[derive(Debug)]
pub struct Credentials {
    api_key: String,
    user: UserInfo,
    token: RwLock<String>,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, user: UserInfo, token: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            user,
            token: RwLock::new(token.into()),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn user(&self) -> &UserInfo {
        &self.user
    }

    pub fn token(&self) -> String {
        self.token
            .read()
            .expect("RwLock should not be poisoned")
            .clone()
    }

    pub fn update_token(&self, token: impl Into<String>) {
        *self.token.write().expect("RwLock should not be poisoned") = token.into();
    }

    /// Replaces the token with one fetched from `provider`. The current token
    /// is kept if the fetch fails.
    pub async fn refresh(&self, provider: &dyn TokenProvider) -> Result<(), anyhow::Error> {
        let token = provider.fetch_token().await?;
        self.update_token(token);
        info!(target: "Client/Rpc", "User token refreshed");
        Ok(())
    }
}
