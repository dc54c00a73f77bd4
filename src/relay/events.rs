use tracing::info;

use crate::app::App;
use crate::error::RelayError;
use crate::slack::verify_token;
use crate::types::*;

pub const ACK: &str = "OK";

/// Handles an Events API delivery and returns the plain-text response body.
pub async fn handle_event_payload(app: &App, body: &[u8]) -> Result<String, RelayError> {
    let payload: SlackEventPayload = serde_json::from_slice(body)?;

    info!("Verifying Slack token...");
    verify_token(payload.token(), &app.config.verification_token)?;

    match payload {
        SlackEventPayload::UrlVerification { challenge, .. } => {
            info!("Handling Slack URL verification event...");
            let challenge = challenge
                .filter(|c| !c.is_empty())
                .ok_or(RelayError::MissingField("challenge"))?;

            info!("Responding to Slack URL verification with challenge: '{}'", challenge);
            Ok(challenge)
        }
        SlackEventPayload::EventCallback { event, .. } => {
            let event = event.ok_or(RelayError::MissingField("event"))?;

            match event {
                SlackEvent::UserChange { user } => handle_user_change(app, &user).await,
                SlackEvent::Other => {
                    info!("Ignoring non user_change event");
                    Ok(ACK.to_string())
                }
            }
        }
    }
}

/// Announces a user who switched to the trigger status on their discipline's webhook.
pub async fn handle_user_change(app: &App, user: &SlackUser) -> Result<String, RelayError> {
    let status_text = &app.config.raise_hand_status_text;
    if !user.profile.has_status(status_text) {
        info!("Ignoring non-'{}' status text", status_text);
        return Ok(ACK.to_string());
    }

    info!("Handling '{}' status text for {}", status_text, user.id);

    let groups = app.slack.list_user_groups().await?;
    let group = app.router.discipline_group(&groups, &user.id);
    match group {
        Some(group) => info!("User {} belongs to group '{}' ({})", user.id, group.name, group.id),
        None => info!("User {} is in no discipline group", user.id),
    }
    let webhook_url = app.router.webhook_for(group.map(|g| g.id.as_str()));

    let message = format!("<!here> {} is '{}'", user.profile.real_name, status_text);
    info!("Posting to Slack: '{}'", message);

    app.slack.post_webhook(webhook_url, &message).await?;
    Ok(ACK.to_string())
}
