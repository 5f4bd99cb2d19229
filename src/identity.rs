//! Identity collaborator supplying the player's display profile.
//!
//! The hosting platform may expose a profile endpoint; when it is absent,
//! misconfigured, slow, or failing, the app degrades to a generic guest
//! label. Profile data is purely cosmetic and never blocks gameplay.

use async_trait::async_trait;
use derive_getters::Getters;
use derive_more::{Display, Error, From};
use serde::Deserialize;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Display name used when no profile is available.
const GUEST_NAME: &str = "Player";

/// Display profile for the human player.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Name shown next to the X marker and in announcements.
    display_name: String,
    /// Avatar image URL, if the platform supplied one.
    #[serde(default)]
    picture_url: Option<String>,
    /// Free-form status line, if the platform supplied one.
    #[serde(default)]
    status_message: Option<String>,
}

impl Profile {
    /// The generic profile used when the platform is unavailable.
    pub fn guest() -> Self {
        Self {
            display_name: GUEST_NAME.to_string(),
            picture_url: None,
            status_message: None,
        }
    }
}

/// Errors from the identity collaborator.
#[derive(Debug, Display, Error, From)]
pub enum IdentityError {
    /// The profile request failed.
    #[display("profile request failed: {_0}")]
    Request(reqwest::Error),
    /// The provider has no endpoint or credentials configured.
    #[display("identity provider not configured")]
    NotConfigured,
}

/// Source of the player's display profile.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Fetches the profile of the signed-in player.
    async fn profile(&self) -> Result<Profile, IdentityError>;
}

/// HTTP-backed provider for the mini-app host platform.
///
/// Fetches `GET {base}/v2/profile` with a bearer token, the shape exposed
/// by messaging-platform mini-app hosts.
#[derive(Debug, Clone)]
pub struct MiniAppIdentity {
    base_url: String,
    access_token: String,
    client: reqwest::Client,
}

impl MiniAppIdentity {
    /// Creates a provider for the given endpoint and token.
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: access_token.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Builds a provider when both endpoint and token are present.
    pub fn from_parts(base_url: Option<String>, access_token: Option<String>) -> Option<Self> {
        match (base_url, access_token) {
            (Some(url), Some(token)) => Some(Self::new(url, token)),
            _ => None,
        }
    }
}

#[async_trait]
impl IdentityProvider for MiniAppIdentity {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn profile(&self) -> Result<Profile, IdentityError> {
        let url = format!("{}/v2/profile", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?
            .error_for_status()?;

        let profile = response.json::<Profile>().await?;
        info!(display_name = %profile.display_name(), "Fetched player profile");
        Ok(profile)
    }
}

/// Provider used when no host platform is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct GuestIdentity;

#[async_trait]
impl IdentityProvider for GuestIdentity {
    async fn profile(&self) -> Result<Profile, IdentityError> {
        Err(IdentityError::NotConfigured)
    }
}

/// Resolves the player profile, degrading to the guest label.
///
/// Applies a short timeout so a slow platform never delays startup; any
/// failure is logged and replaced by [`Profile::guest`].
#[instrument(skip(provider))]
pub async fn resolve_profile(provider: &dyn IdentityProvider, timeout: Duration) -> Profile {
    match tokio::time::timeout(timeout, provider.profile()).await {
        Ok(Ok(profile)) => profile,
        Ok(Err(e)) => {
            warn!(error = %e, "Profile unavailable, using guest label");
            Profile::guest()
        }
        Err(_) => {
            warn!(timeout = ?timeout, "Profile fetch timed out, using guest label");
            Profile::guest()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_deserializes_platform_payload() {
        let json = r#"{
            "userId": "U1234",
            "displayName": "Alice",
            "pictureUrl": "https://example.com/avatar.png",
            "statusMessage": "hi"
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.display_name(), "Alice");
        assert_eq!(
            profile.picture_url().as_deref(),
            Some("https://example.com/avatar.png")
        );
    }

    #[test]
    fn test_profile_tolerates_missing_optionals() {
        let profile: Profile = serde_json::from_str(r#"{"displayName":"Bob"}"#).unwrap();
        assert_eq!(profile.display_name(), "Bob");
        assert_eq!(*profile.picture_url(), None);
    }

    #[test]
    fn test_guest_profile_label() {
        assert_eq!(Profile::guest().display_name(), "Player");
    }
}
