//! Issue-tracker plugin: Jira tickets assigned to the configured user,
//! grouped by project and status.

pub mod normalize;
pub mod schema;

use crate::http::Auth;
use crate::registry::PluginKind;
use crate::traits::{FetchContext, Provider, required};
use crate::Result;
use ohmybar_types::{GroupDepth, Record, StatusMap, StatusSpec};
use reqwest::Url;
use serde::Deserialize;

pub use normalize::{TicketLinks, normalize_issue, normalize_issues};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JiraConfig {
    pub title: Option<String>,
    pub host: Option<String>,
    pub email: Option<String>,
    pub token: Option<String>,
    pub user_id: String,
    /// Replaces the generated assignee/status query when set
    pub jql: Option<String>,
    pub order: String,
    pub exclude_statuses: Vec<String>,
    pub statuses: Vec<StatusSpec>,
    pub link_to_project_filter: bool,
    pub link_to_status_filter: bool,
    pub group_depth: GroupDepth,
    pub use_separators: bool,
    pub item_length: Option<usize>,
}

impl Default for JiraConfig {
    fn default() -> Self {
        Self {
            title: None,
            host: None,
            email: None,
            token: None,
            user_id: "currentUser()".to_string(),
            jql: None,
            order: "key".to_string(),
            exclude_statuses: vec![
                "Done".to_string(),
                "Canceled".to_string(),
                "Closed".to_string(),
            ],
            statuses: default_statuses(),
            link_to_project_filter: true,
            link_to_status_filter: true,
            group_depth: GroupDepth::ByProjectStatus,
            use_separators: false,
            item_length: None,
        }
    }
}

pub fn default_statuses() -> Vec<StatusSpec> {
    [
        ("Blocked", "#ff0000"),
        ("In progress", "#3aff00"),
        ("Code review", "#fec300"),
        ("Merged", "#ff6946"),
        ("Draft", "#cccccc"),
        ("Estimate", "#3f81cc"),
        ("Review", "#90b000"),
        ("On Hold", "#c0b389"),
        ("To Do", "#1f77ff"),
    ]
    .into_iter()
    .map(|(status, color)| StatusSpec::single(status, color))
    .collect()
}

impl JiraConfig {
    pub fn status_map(&self) -> StatusMap {
        StatusMap::from_specs(&self.statuses)
    }

    /// Query used for the ticket search
    pub fn search_jql(&self) -> String {
        if let Some(jql) = &self.jql {
            return jql.clone();
        }

        let excluded = self
            .exclude_statuses
            .iter()
            .map(|status| format!("\"{}\"", status))
            .collect::<Vec<_>>()
            .join(", ");

        if excluded.is_empty() {
            format!(
                "assignee in ({}) order by {} DESC",
                self.user_id, self.order
            )
        } else {
            format!(
                "assignee in ({}) and status not in ({}) order by {} DESC",
                self.user_id, excluded, self.order
            )
        }
    }

    fn base(&self) -> &str {
        self.host.as_deref().unwrap_or_default().trim_end_matches('/')
    }

    /// Link to the issue navigator filtered by `jql`
    pub fn filter_link(&self, jql: &str) -> Option<String> {
        let mut url = Url::parse(&format!("{}/issues/", self.base())).ok()?;
        url.query_pairs_mut().append_pair("jql", jql);
        Some(url.to_string())
    }
}

impl TicketLinks for JiraConfig {
    fn ticket_url(&self, key: &str) -> String {
        format!("{}/browse/{}", self.base(), key)
    }

    fn project_filter(&self, project_key: &str) -> Option<String> {
        if !self.link_to_project_filter {
            return None;
        }
        self.filter_link(&format!("project = {} order by key DESC", project_key))
    }

    fn status_filter(&self, statuses: &[&str]) -> Option<String> {
        if !self.link_to_status_filter {
            return None;
        }
        let condition = match statuses {
            [] => return None,
            [status] => format!("status = \"{}\"", status),
            _ => format!(
                "status in ({})",
                statuses
                    .iter()
                    .map(|status| format!("\"{}\"", status))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        };
        self.filter_link(&format!("{} order by {} DESC", condition, self.order))
    }
}

impl Provider for JiraConfig {
    fn kind(&self) -> PluginKind {
        PluginKind::IssueTracker
    }

    async fn fetch(&self, ctx: &FetchContext<'_>) -> Result<Vec<Record>> {
        required(self.host.as_deref(), "jira host")?;
        let email = required(self.email.as_deref(), "jira email")?;
        let token = required(self.token.as_deref(), "jira token")?;

        let mut search = Url::parse(&format!("{}/rest/api/3/search", self.base()))?;
        search
            .query_pairs_mut()
            .append_pair("jql", &self.search_jql())
            .append_pair("fields", "summary,status,project");

        let auth = Auth::Basic {
            user: email,
            password: token,
        };
        let response: schema::SearchResponse = ctx.http.get_json(search.as_str(), auth).await?;

        let item_length = self.item_length.unwrap_or(ctx.item_length);
        let records = normalize_issues(&response.issues, self, item_length);
        tracing::info!("jira: {} tickets", records.len());

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> JiraConfig {
        JiraConfig {
            host: Some("https://acme.atlassian.net/".to_string()),
            ..JiraConfig::default()
        }
    }

    #[test]
    fn test_generated_jql() {
        assert_eq!(
            config().search_jql(),
            r#"assignee in (currentUser()) and status not in ("Done", "Canceled", "Closed") order by key DESC"#
        );
    }

    #[test]
    fn test_custom_jql_wins() {
        let config = JiraConfig {
            jql: Some("project = OPS".to_string()),
            ..config()
        };
        assert_eq!(config.search_jql(), "project = OPS");
    }

    #[test]
    fn test_jql_without_exclusions() {
        let config = JiraConfig {
            exclude_statuses: Vec::new(),
            ..config()
        };
        assert_eq!(
            config.search_jql(),
            "assignee in (currentUser()) order by key DESC"
        );
    }

    #[test]
    fn test_links() {
        let config = config();
        assert_eq!(
            config.ticket_url("OPS-1"),
            "https://acme.atlassian.net/browse/OPS-1"
        );
        assert_eq!(
            config.project_filter("OPS").as_deref(),
            Some("https://acme.atlassian.net/issues/?jql=project+%3D+OPS+order+by+key+DESC")
        );

        let unlinked = JiraConfig {
            link_to_status_filter: false,
            ..config
        };
        assert_eq!(unlinked.status_filter(&["To Do"]), None);
    }

    #[test]
    fn test_status_filter_covers_merged_statuses() {
        let config = config();
        let decode = |link: Option<String>| {
            let url = Url::parse(&link.unwrap()).unwrap();
            url.query_pairs()
                .find(|(key, _)| key == "jql")
                .map(|(_, jql)| jql.into_owned())
                .unwrap()
        };

        assert_eq!(
            decode(config.status_filter(&["To Do"])),
            r#"status = "To Do" order by key DESC"#
        );
        assert_eq!(
            decode(config.status_filter(&["In progress", "Code review"])),
            r#"status in ("In progress", "Code review") order by key DESC"#
        );
        assert_eq!(config.status_filter(&[]), None);
    }

    #[test]
    fn test_default_status_map() {
        let map = config().status_map();
        assert_eq!(map.len(), 9);
        assert_eq!(map.get("to do").unwrap().sort_index, 8);
        assert_eq!(map.get("blocked").unwrap().color, "#ff0000");
    }
}
