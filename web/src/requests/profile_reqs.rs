use anyhow::Error;
use gloo_net::http::Request;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::config::ApiConfig;

pub const USER_FOUND: &str = "USER-FOUND";
pub const PASSWORD_UPDATE_SUCCESS: &str = "PASSWORD-UPDATE-SUCCESS";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again later.";

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    #[serde(deserialize_with = "text_or_empty")]
    pub first_name: String,
    #[serde(deserialize_with = "text_or_empty")]
    pub middle_name: String,
    #[serde(deserialize_with = "text_or_empty")]
    pub last_name: String,
    #[serde(deserialize_with = "text_or_empty")]
    pub email: String,
    #[serde(deserialize_with = "text_or_empty")]
    pub contact_number: String,
}

/// Null becomes `""`, numbers and other scalars their JSON text.
fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(other) => other.to_string(),
    })
}

impl UserProfile {
    /// First, middle and last name joined by single spaces, verbatim.
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.first_name, self.middle_name, self.last_name)
    }
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PasswordUpdateRequest {
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordUpdateRequest {
    pub fn passwords_match(&self) -> bool {
        self.new_password == self.confirm_password
    }

    pub fn is_complete(&self) -> bool {
        !self.new_password.is_empty() && !self.confirm_password.is_empty()
    }
}

/// The `{ code, message?, result? }` shape every backend reply uses.
///
/// `error` never comes from the server. It is filled in locally when the
/// request could not be completed or the body was not an envelope.
#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct ApiEnvelope<T> {
    pub code: Option<String>,
    pub message: Option<String>,
    pub result: Option<T>,
    #[serde(skip)]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn network_failure(error: &str) -> Self {
        Self {
            code: None,
            message: None,
            result: None,
            error: Some(error.to_string()),
        }
    }

    pub fn has_code(&self, expected: &str) -> bool {
        self.code.as_deref() == Some(expected)
    }

    /// The server message, else the local transport error, else `fallback`.
    /// Empty strings count as missing.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .as_deref()
            .filter(|message| !message.is_empty())
            .or_else(|| self.error.as_deref().filter(|error| !error.is_empty()))
            .unwrap_or(fallback)
            .to_string()
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

pub async fn call_get_user_details(
    config: &ApiConfig,
    token: &str,
) -> Result<ApiEnvelope<UserProfile>, Error> {
    let url = config.user_details_url();

    let response = Request::get(&url)
        .header("Authorization", &bearer(token))
        .send()
        .await?;

    if !response.ok() {
        log::warn!("GET {} answered {}", url, response.status());
    }
    let envelope = response.json::<ApiEnvelope<UserProfile>>().await?;
    Ok(envelope)
}

pub async fn call_update_password(
    config: &ApiConfig,
    token: &str,
    update: &PasswordUpdateRequest,
) -> Result<ApiEnvelope<Value>, Error> {
    let url = config.update_password_url();
    let json_body = serde_json::to_string(update)?;

    let response = Request::put(&url)
        .header("Authorization", &bearer(token))
        .header("Content-Type", "application/json")
        .body(json_body)?
        .send()
        .await?;

    if !response.ok() {
        log::warn!("PUT {} answered {}", url, response.status());
    }
    let envelope = response.json::<ApiEnvelope<Value>>().await?;
    Ok(envelope)
}

/// The two backend calls the profile page makes.
///
/// Implementations never fail: transport problems come back as an envelope
/// built with [`ApiEnvelope::network_failure`].
#[allow(async_fn_in_trait)]
pub trait ProfileApi {
    async fn get_user_details(&self, token: &str) -> ApiEnvelope<UserProfile>;

    async fn update_password(
        &self,
        token: &str,
        update: &PasswordUpdateRequest,
    ) -> ApiEnvelope<Value>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpProfileApi {
    pub config: ApiConfig,
}

impl ProfileApi for HttpProfileApi {
    async fn get_user_details(&self, token: &str) -> ApiEnvelope<UserProfile> {
        match call_get_user_details(&self.config, token).await {
            Ok(envelope) => envelope,
            Err(e) => {
                log::error!("Error fetching user details: {}", e);
                ApiEnvelope::network_failure(NETWORK_ERROR_MESSAGE)
            }
        }
    }

    async fn update_password(
        &self,
        token: &str,
        update: &PasswordUpdateRequest,
    ) -> ApiEnvelope<Value> {
        match call_update_password(&self.config, token, update).await {
            Ok(envelope) => envelope,
            Err(e) => {
                log::error!("Error updating password: {}", e);
                ApiEnvelope::network_failure(NETWORK_ERROR_MESSAGE)
            }
        }
    }
}
