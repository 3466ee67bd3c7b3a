/// Local storage key the login flow writes the bearer token under.
pub const TOKEN_STORAGE_KEY: &str = "token";

pub const DEFAULT_API_URL: &str = "http://localhost:4000";

/// Where the profile backend lives.
///
/// The base URL is fixed at build time: set `PROFILE_API_URL` when running
/// `trunk build` to point the page at another server.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_base_url(option_env!("PROFILE_API_URL").unwrap_or(DEFAULT_API_URL))
    }
}

impl ApiConfig {
    pub fn from_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn user_details_url(&self) -> String {
        format!("{}/users/details", self.base_url)
    }

    pub fn update_password_url(&self) -> String {
        format!("{}/users/update-password", self.base_url)
    }
}

/// Reads the bearer token left behind by the login flow.
///
/// Returns `None` outside a browser, when storage is disabled, or when nobody
/// has signed in yet.
pub fn stored_token() -> Option<String> {
    let window = web_sys::window()?;
    match window.local_storage() {
        Ok(Some(local_storage)) => match local_storage.get_item(TOKEN_STORAGE_KEY) {
            Ok(token) => token,
            Err(e) => {
                log::warn!("Could not read {} from localStorage: {:?}", TOKEN_STORAGE_KEY, e);
                None
            }
        },
        _ => {
            log::warn!("localStorage is not available");
            None
        }
    }
}
