use super::schema::Issue;
use crate::Result;
use crate::normalization::{normalize_all, normalize_status};
use ohmybar_types::{GroupKey, Record, RecordKind, truncate};

/// Builds the links a ticket record carries.
pub trait TicketLinks {
    fn ticket_url(&self, key: &str) -> String;
    fn project_filter(&self, project_key: &str) -> Option<String>;
    fn status_filter(&self, statuses: &[&str]) -> Option<String>;
}

pub fn normalize_issues(
    issues: &[Issue],
    links: &impl TicketLinks,
    item_length: usize,
) -> Vec<Record> {
    normalize_all(issues, |issue| normalize_issue(issue, links, item_length))
}

/// Ticket → record grouped by `[project, status]`.
pub fn normalize_issue(
    issue: &Issue,
    links: &impl TicketLinks,
    item_length: usize,
) -> Result<Option<Record>> {
    let project = &issue.fields.project;
    let status_name = issue.fields.status.name.trim();
    let status = normalize_status(status_name);

    let mut project_key = GroupKey::new(&project.key, format!("{} ({})", project.key, project.name));
    project_key.href = links.project_filter(&project.key);

    let mut status_key = GroupKey::new(&status, status_name);
    status_key.href = links.status_filter(&[status_name]);

    let title = truncate(
        &format!("{} - {}", issue.key, issue.fields.summary),
        item_length,
    );

    Ok(Some(
        Record::new(title, links.ticket_url(&issue.key), RecordKind::Issue)
            .with_group(project_key)
            .with_group(status_key)
            .with_status(status),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jira::schema::SearchResponse;

    struct Links;

    impl TicketLinks for Links {
        fn ticket_url(&self, key: &str) -> String {
            format!("https://jira.example.com/browse/{}", key)
        }

        fn project_filter(&self, project_key: &str) -> Option<String> {
            Some(format!("project:{}", project_key))
        }

        fn status_filter(&self, _statuses: &[&str]) -> Option<String> {
            None
        }
    }

    const RESPONSE: &str = r#"{
        "issues": [
            {"key": "OPS-7", "fields": {"status": {"name": "In Progress"}, "summary": "Rotate keys", "project": {"key": "OPS", "name": "Operations"}}},
            {"key": "WEB-1", "fields": {"status": {"name": "To Do"}, "summary": "Landing page", "project": {"key": "WEB", "name": "Website"}}}
        ]
    }"#;

    #[test]
    fn test_ticket_records() {
        let response: SearchResponse = serde_json::from_str(RESPONSE).unwrap();
        let records = normalize_issues(&response.issues, &Links, 45);

        assert_eq!(records.len(), 2);
        let ops = &records[0];
        assert_eq!(ops.title, "OPS-7 - Rotate keys");
        assert_eq!(ops.href, "https://jira.example.com/browse/OPS-7");
        assert_eq!(ops.status.as_deref(), Some("in progress"));

        let project = ops.project().unwrap();
        assert_eq!(project.key, "OPS");
        assert_eq!(project.label, "OPS (Operations)");
        assert_eq!(project.href.as_deref(), Some("project:OPS"));

        let status = ops.group(1).unwrap();
        assert_eq!(status.key, "in progress");
        assert_eq!(status.label, "In Progress");
        assert_eq!(status.href, None);
    }

    #[test]
    fn test_ticket_titles_are_truncated() {
        let response: SearchResponse = serde_json::from_str(RESPONSE).unwrap();
        let records = normalize_issues(&response.issues, &Links, 8);
        assert_eq!(records[0].title, "OPS-7 -…");
    }
}
