use httpmock::MockServer;

use crate::app::App;
use crate::config::Config;
use crate::slack::SlackClient;

pub const VERIFICATION_TOKEN: &str = "verify-me";

/// App wired to a mock server: Web API under `/api`, webhooks under `/hooks/<discipline>`.
pub fn test_app(server: &MockServer) -> App {
    let config = Config::from_lookup(|name| {
        let value = match name {
            "GENERAL_WEBHOOK_URL" => server.url("/hooks/general"),
            "ENG_WEBHOOK_URL" => server.url("/hooks/eng"),
            "PM_WEBHOOK_URL" => server.url("/hooks/pm"),
            "QA_WEBHOOK_URL" => server.url("/hooks/qa"),
            "XD_WEBHOOK_URL" => server.url("/hooks/xd"),
            "ENG_GROUP_ID" => "S_ENG".to_string(),
            "PM_GROUP_ID" => "S_PM".to_string(),
            "QA_GROUP_ID" => "S_QA".to_string(),
            "XD_GROUP_ID" => "S_XD".to_string(),
            "AD_GROUP_ID" => "S_AD".to_string(),
            "OAUTH_ACCESS_TOKEN" => "xoxp-test".to_string(),
            "VERIFICATION_TOKEN" => VERIFICATION_TOKEN.to_string(),
            "RAISE_HAND_STATUS_TEXT" => "Available to Help".to_string(),
            _ => return None,
        };
        Some(value)
    })
    .expect("test config");

    let slack = SlackClient::with_base_url(server.url("/api"), config.oauth_access_token.clone());
    App::with_slack(config, slack)
}
