//! Gate configuration parsed from a key lookup.
//!
//! DESIGN
//! ======
//! Values arrive through a lookup closure so one parser serves the process
//! environment (native tests, tooling) and build-time constants baked into
//! the WASM bundle.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_LANDING_PATH: &str = "/transactions";
pub const DEFAULT_LOGIN_PATH: &str = "/login";

pub const LANDING_PATH_VAR: &str = "FORMDESK_LANDING_PATH";
pub const LOGIN_PATH_VAR: &str = "FORMDESK_LOGIN_PATH";

/// Error returned when the gate configuration or its route table is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be an absolute path, got {value:?}")]
    NotAbsolute { field: &'static str, value: String },
    #[error("login and landing paths must differ (both {0:?})")]
    SamePath(String),
    #[error("landing path {0:?} is not an authenticated view")]
    LandingNotProtected(String),
    #[error("login path {0:?} is not a guest-only view")]
    LoginNotGuestOnly(String),
    #[error("route {0:?} cannot require both an authenticated and a guest session")]
    ConflictingMeta(String),
    #[error("duplicate route path {0:?}")]
    DuplicatePath(String),
}

/// Where the guard sends sessions it turns away.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GateConfig {
    /// Default authenticated route; guest-only pages redirect here.
    pub landing_path: String,
    /// Guest-only sign-in route; protected pages redirect here.
    pub login_path: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            landing_path: DEFAULT_LANDING_PATH.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
        }
    }
}

impl GateConfig {
    /// Build config from a key lookup.
    ///
    /// Optional:
    /// - `FORMDESK_LANDING_PATH`: default `/transactions`
    /// - `FORMDESK_LOGIN_PATH`: default `/login`
    ///
    /// Blank values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let landing_path = non_blank(lookup(LANDING_PATH_VAR)).unwrap_or_else(|| DEFAULT_LANDING_PATH.to_owned());
        let login_path = non_blank(lookup(LOGIN_PATH_VAR)).unwrap_or_else(|| DEFAULT_LOGIN_PATH.to_owned());
        let config = Self { landing_path, login_path };
        config.validate()?;
        Ok(config)
    }

    /// Build config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Check the paths in isolation. Route-table checks happen in
    /// [`crate::routes::RouteTable::new`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.landing_path.starts_with('/') {
            return Err(ConfigError::NotAbsolute { field: "landing_path", value: self.landing_path.clone() });
        }
        if !self.login_path.starts_with('/') {
            return Err(ConfigError::NotAbsolute { field: "login_path", value: self.login_path.clone() });
        }
        if self.landing_path.eq_ignore_ascii_case(&self.login_path) {
            return Err(ConfigError::SamePath(self.login_path.clone()));
        }
        Ok(())
    }
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_owned()).filter(|value| !value.is_empty())
}
