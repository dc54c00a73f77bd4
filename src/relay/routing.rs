use std::collections::HashMap;

use crate::config::Config;
use crate::types::SlackUserGroup;

/// Maps discipline group ids to the webhook their notifications go to.
#[derive(Debug, Clone)]
pub struct WebhookRouter {
    routes: HashMap<String, String>,
    general: String,
}

impl WebhookRouter {
    pub fn from_config(config: &Config) -> Self {
        let routes = [
            (&config.eng_group_id, &config.eng_webhook_url),
            (&config.pm_group_id, &config.pm_webhook_url),
            (&config.qa_group_id, &config.qa_webhook_url),
            (&config.xd_group_id, &config.xd_webhook_url),
            (&config.ad_group_id, &config.xd_webhook_url),
        ]
        .into_iter()
        .map(|(group, url)| (group.clone(), url.clone()))
        .collect();

        Self {
            routes,
            general: config.general_webhook_url.clone(),
        }
    }

    /// First discipline group, in API order, that lists `user_id` as a member.
    pub fn discipline_group<'a>(
        &self,
        groups: &'a [SlackUserGroup],
        user_id: &str,
    ) -> Option<&'a SlackUserGroup> {
        groups
            .iter()
            .filter(|group| self.routes.contains_key(&group.id))
            .find(|group| group.users.iter().any(|member| member == user_id))
    }

    pub fn webhook_for(&self, group_id: Option<&str>) -> &str {
        group_id
            .and_then(|id| self.routes.get(id))
            .map(String::as_str)
            .unwrap_or(self.general.as_str())
    }
}
