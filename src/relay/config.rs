use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingVariable(String),
}

/// Everything the relay needs, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub general_webhook_url: String,
    pub eng_webhook_url: String,
    pub pm_webhook_url: String,
    pub qa_webhook_url: String,
    pub xd_webhook_url: String,
    pub eng_group_id: String,
    pub pm_group_id: String,
    pub qa_group_id: String,
    pub xd_group_id: String,
    pub ad_group_id: String,
    pub oauth_access_token: String,
    pub verification_token: String,
    pub raise_hand_status_text: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source. The first absent variable,
    /// in declaration order, is reported.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingVariable(name.to_string()))
        };

        Ok(Self {
            general_webhook_url: var("GENERAL_WEBHOOK_URL")?,
            eng_webhook_url: var("ENG_WEBHOOK_URL")?,
            pm_webhook_url: var("PM_WEBHOOK_URL")?,
            qa_webhook_url: var("QA_WEBHOOK_URL")?,
            xd_webhook_url: var("XD_WEBHOOK_URL")?,
            eng_group_id: var("ENG_GROUP_ID")?,
            pm_group_id: var("PM_GROUP_ID")?,
            qa_group_id: var("QA_GROUP_ID")?,
            xd_group_id: var("XD_GROUP_ID")?,
            ad_group_id: var("AD_GROUP_ID")?,
            oauth_access_token: var("OAUTH_ACCESS_TOKEN")?,
            verification_token: var("VERIFICATION_TOKEN")?,
            raise_hand_status_text: var("RAISE_HAND_STATUS_TEXT")?,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("general_webhook_url", &self.general_webhook_url)
            .field("eng_webhook_url", &self.eng_webhook_url)
            .field("pm_webhook_url", &self.pm_webhook_url)
            .field("qa_webhook_url", &self.qa_webhook_url)
            .field("xd_webhook_url", &self.xd_webhook_url)
            .field("eng_group_id", &self.eng_group_id)
            .field("pm_group_id", &self.pm_group_id)
            .field("qa_group_id", &self.qa_group_id)
            .field("xd_group_id", &self.xd_group_id)
            .field("ad_group_id", &self.ad_group_id)
            .field("oauth_access_token", &"<redacted>")
            .field("verification_token", &"<redacted>")
            .field("raise_hand_status_text", &self.raise_hand_status_text)
            .finish()
    }
}
