//! Environment-driven configuration.
//!
//! Everything this service needs to know is plain configuration, not protocol:
//! the external script endpoint, optional media-host credentials and the bind
//! address. The script URL is the only hard requirement; without it the proxy
//! has nowhere to forward to and startup fails.

use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Base URL of the external spreadsheet-backed script endpoint.
    pub script_url: String,
    /// Present only when all three media-host credentials are configured.
    pub cloudinary: Option<CloudinaryConfig>,
}

#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let script_url = env::var("APPS_SCRIPT_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .ok_or_else(|| "APPS_SCRIPT_URL is not set".to_string())?;
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        Ok(AppConfig {
            host,
            port,
            script_url,
            cloudinary: CloudinaryConfig::from_values(
                env::var("CLOUDINARY_CLOUD_NAME").ok(),
                env::var("CLOUDINARY_API_KEY").ok(),
                env::var("CLOUDINARY_API_SECRET").ok(),
            ),
        })
    }
}

impl CloudinaryConfig {
    /// Capability check: direct uploads are available only when the account
    /// name, key and secret are all present and non-empty.
    pub fn from_values(
        cloud_name: Option<String>,
        api_key: Option<String>,
        api_secret: Option<String>,
    ) -> Option<Self> {
        let cloud_name = cloud_name.filter(|v| !v.is_empty())?;
        let api_key = api_key.filter(|v| !v.is_empty())?;
        let api_secret = api_secret.filter(|v| !v.is_empty())?;
        Some(CloudinaryConfig {
            cloud_name,
            api_key,
            api_secret,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_require_all_three_values() {
        assert!(CloudinaryConfig::from_values(
            Some("demo".to_string()),
            Some("key".to_string()),
            Some("secret".to_string()),
        )
        .is_some());

        assert!(CloudinaryConfig::from_values(
            Some("demo".to_string()),
            None,
            Some("secret".to_string()),
        )
        .is_none());
    }

    #[test]
    fn empty_values_do_not_count_as_configured() {
        assert!(CloudinaryConfig::from_values(
            Some("demo".to_string()),
            Some(String::new()),
            Some("secret".to_string()),
        )
        .is_none());
    }
}
