use crate::config::Config;
use crate::routing::WebhookRouter;
use crate::slack::SlackClient;

/// Read-only state shared by every request.
pub struct App {
    pub config: Config,
    pub slack: SlackClient,
    pub router: WebhookRouter,
}

impl App {
    pub fn new(config: Config) -> Self {
        let slack = SlackClient::new(config.oauth_access_token.clone());
        Self::with_slack(config, slack)
    }

    pub fn with_slack(config: Config, slack: SlackClient) -> Self {
        let router = WebhookRouter::from_config(&config);
        Self {
            config,
            slack,
            router,
        }
    }
}
