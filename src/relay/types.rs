use serde::{Deserialize, Serialize};

/// Payload Slack delivers to the Events API endpoint.
///
/// Slack sends `url_verification` once while the request URL is being
/// configured, then `event_callback` for every subscribed workspace event.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlackEventPayload {
    UrlVerification {
        token: String,
        challenge: Option<String>,
    },
    EventCallback {
        token: String,
        event: Option<SlackEvent>,
    },
}

impl SlackEventPayload {
    pub fn token(&self) -> &str {
        match self {
            Self::UrlVerification { token, .. } | Self::EventCallback { token, .. } => token,
        }
    }
}

/// Workspace event nested in an `event_callback`. Only `user_change` is acted on.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlackEvent {
    UserChange { user: SlackUser },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlackUser {
    pub id: String,
    pub profile: SlackProfile,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlackProfile {
    #[serde(default)]
    pub real_name: String,
    pub status_text: Option<String>,
}

impl SlackProfile {
    pub fn has_status(&self, status_text: &str) -> bool {
        self.status_text.as_deref() == Some(status_text)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlackUserGroup {
    pub id: String,
    #[serde(default)]
    pub name: String,
    // Only present when listed with `include_users=true`.
    #[serde(default)]
    pub users: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListUsersResponse {
    pub ok: bool,
    #[serde(default)]
    pub members: Vec<SlackUser>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListUserGroupsResponse {
    #[serde(default = "default_ok")]
    pub ok: bool,
    #[serde(default)]
    pub usergroups: Vec<SlackUserGroup>,
    pub error: Option<String>,
}

fn default_ok() -> bool {
    true
}

/// Form fields of a slash command invocation that the relay reads.
#[derive(Debug, Clone)]
pub struct SlashCommand {
    pub token: String,
    pub response_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    InChannel,
    Ephemeral,
}

#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub response_type: ResponseType,
    pub text: String,
}

/// Body posted to an Incoming Webhook.
#[derive(Debug, Serialize)]
pub struct WebhookMessage {
    pub text: String,
}
