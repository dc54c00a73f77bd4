use std::collections::HashMap;

use tracing::info;

use crate::app::App;
use crate::error::RelayError;
use crate::slack::verify_token;
use crate::types::*;

pub fn parse_slash_command(body: &str) -> Result<SlashCommand, RelayError> {
    let params: HashMap<String, String> = serde_urlencoded::from_str(body)?;

    Ok(SlashCommand {
        token: params
            .get("token")
            .cloned()
            .ok_or(RelayError::MissingField("token"))?,
        response_url: params.get("response_url").cloned().unwrap_or_default(),
    })
}

/// Lists everyone whose status is the trigger text, in the order Slack returns them.
pub async fn handle_available_to_help(
    app: &App,
    command: &SlashCommand,
) -> Result<CommandResponse, RelayError> {
    verify_token(&command.token, &app.config.verification_token)?;

    info!(
        "Handling 'availableToHelp' command (response_url: {})...",
        command.response_url
    );

    let status_text = &app.config.raise_hand_status_text;
    let users = app.slack.list_users().await?;
    let names: Vec<&str> = users
        .iter()
        .filter(|user| user.profile.has_status(status_text))
        .map(|user| user.profile.real_name.as_str())
        .collect();

    info!("Users '{}': {:?}", status_text, names);

    Ok(CommandResponse {
        response_type: ResponseType::InChannel,
        text: available_to_help_text(status_text, &names),
    })
}

pub fn available_to_help_text(status_text: &str, names: &[&str]) -> String {
    if names.is_empty() {
        format!("No one is '{}' :(", status_text)
    } else {
        format!("These people are '{}':\n\n{}", status_text, names.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{test_app, VERIFICATION_TOKEN};
    use httpmock::prelude::*;
    use serde_json::json;

    fn command() -> SlashCommand {
        SlashCommand {
            token: VERIFICATION_TOKEN.to_string(),
            response_url: "https://hooks.slack.com/commands/T1/1/abc".to_string(),
        }
    }

    #[test]
    fn formats_empty_and_populated_lists() {
        assert_eq!(
            available_to_help_text("Available to Help", &[]),
            "No one is 'Available to Help' :("
        );
        assert_eq!(
            available_to_help_text("Available to Help", &["Alice", "Bob"]),
            "These people are 'Available to Help':\n\nAlice\nBob"
        );
    }

    #[test]
    fn parses_form_body() {
        let command = parse_slash_command(
            "token=abc&team_id=T1&command=%2FavailableToHelp&response_url=https%3A%2F%2Fhooks.slack.com%2Fcommands%2F1",
        )
        .expect("command");

        assert_eq!(command.token, "abc");
        assert_eq!(command.response_url, "https://hooks.slack.com/commands/1");
    }

    #[test]
    fn missing_token_is_rejected() {
        let err = parse_slash_command("response_url=x").unwrap_err();
        assert!(matches!(err, RelayError::MissingField("token")));
    }

    #[tokio::test]
    async fn lists_matching_users_in_api_order() {
        let server = MockServer::start_async().await;
        let users = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/users.list")
                    .header("authorization", "Bearer xoxp-test");
                then.status(200).json_body(json!({
                    "ok": true,
                    "members": [
                        { "id": "U1", "profile": { "real_name": "Alice", "status_text": "Available to Help" } },
                        { "id": "U2", "profile": { "real_name": "Carol", "status_text": "Lunch" } },
                        { "id": "U3", "profile": { "real_name": "Bob", "status_text": "Available to Help" } },
                        { "id": "U4", "profile": { "real_name": "Dave" } }
                    ]
                }));
            })
            .await;
        let app = test_app(&server);

        let response = handle_available_to_help(&app, &command()).await.expect("response");

        users.assert_async().await;
        assert_eq!(response.response_type, ResponseType::InChannel);
        assert_eq!(response.text, "These people are 'Available to Help':\n\nAlice\nBob");
    }

    #[tokio::test]
    async fn nobody_available() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/users.list");
                then.status(200).json_body(json!({
                    "ok": true,
                    "members": [{ "id": "U2", "profile": { "real_name": "Carol", "status_text": "" } }]
                }));
            })
            .await;
        let app = test_app(&server);

        let response = handle_available_to_help(&app, &command()).await.expect("response");
        assert_eq!(response.text, "No one is 'Available to Help' :(");
    }

    #[tokio::test]
    async fn wrong_token_skips_user_lookup() {
        let server = MockServer::start_async().await;
        let users = server
            .mock_async(|when, then| {
                when.path("/api/users.list");
                then.status(200).json_body(json!({ "ok": true, "members": [] }));
            })
            .await;
        let app = test_app(&server);
        let command = SlashCommand {
            token: "forged".to_string(),
            response_url: String::new(),
        };

        let err = handle_available_to_help(&app, &command).await.unwrap_err();

        assert!(matches!(err, RelayError::InvalidToken));
        users.assert_hits_async(0).await;
    }
}
