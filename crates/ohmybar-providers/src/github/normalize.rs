use super::schema::SearchItem;
use crate::Result;
use crate::normalization::{is_excluded, normalize_all, split_resource_url};
use ohmybar_types::{GroupKey, Record, RecordKind, truncate};

pub fn normalize_items(
    items: &[SearchItem],
    exclude_projects: &[String],
    item_length: usize,
) -> Vec<Record> {
    normalize_all(items, |item| normalize_item(item, exclude_projects, item_length))
}

/// Issue or pull request → record grouped by `[project, repo]`.
///
/// Returns `Ok(None)` for excluded projects.
pub fn normalize_item(
    item: &SearchItem,
    exclude_projects: &[String],
    item_length: usize,
) -> Result<Option<Record>> {
    let path = split_resource_url(&item.html_url)?;

    if is_excluded(path.project, exclude_projects) {
        return Ok(None);
    }

    let kind = if path.is_pull_request() {
        RecordKind::Pull
    } else {
        RecordKind::Issue
    };

    let project = GroupKey::new(path.project, truncate(path.project, item_length))
        .with_href(path.project_url());
    let repo =
        GroupKey::new(path.repo, truncate(path.repo, item_length)).with_href(path.repo_url());

    let mut record = Record::new(truncate(&item.title, item_length), &item.html_url, kind)
        .with_group(project)
        .with_group(repo);
    if let Some(state) = &item.state {
        record = record.with_status(crate::normalization::normalize_status(state));
    }

    Ok(Some(record))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, url: &str) -> SearchItem {
        SearchItem {
            title: title.to_string(),
            html_url: url.to_string(),
            state: Some("open".to_string()),
        }
    }

    #[test]
    fn test_issue_and_pull_records() {
        let items = vec![
            item("Fix crash", "https://git.example.com/projA/repoX/issues/1"),
            item("Add feature", "https://git.example.com/projA/repoY/pulls/2"),
        ];

        let records = normalize_items(&items, &[], 45);
        assert_eq!(records.len(), 2);

        let issue = &records[0];
        assert_eq!(issue.kind, RecordKind::Issue);
        assert_eq!(issue.project().unwrap().key, "projA");
        assert_eq!(
            issue.project().unwrap().href.as_deref(),
            Some("https://git.example.com/projA")
        );
        assert_eq!(issue.group(1).unwrap().key, "repoX");
        assert_eq!(issue.status.as_deref(), Some("open"));

        let pull = &records[1];
        assert_eq!(pull.kind, RecordKind::Pull);
        assert_eq!(
            pull.group(1).unwrap().href.as_deref(),
            Some("https://git.example.com/projA/repoY")
        );
    }

    #[test]
    fn test_pull_named_repositories_stay_issues() {
        let items = vec![
            item("Squeaky wheel", "https://github.com/acme/pulley/issues/4"),
            item("Typo", "https://github.com/pullman/docs/issues/5"),
            item("Grease it", "https://github.com/acme/pulley/pull/6"),
        ];

        let kinds: Vec<_> = normalize_items(&items, &[], 45)
            .into_iter()
            .map(|record| record.kind)
            .collect();
        assert_eq!(kinds, vec![RecordKind::Issue, RecordKind::Issue, RecordKind::Pull]);
    }

    #[test]
    fn test_excluded_projects_are_dropped() {
        let items = vec![
            item("a", "https://github.com/keep/r/issues/1"),
            item("b", "https://github.com/archive/r/issues/2"),
        ];

        let records = normalize_items(&items, &["archive".to_string()], 45);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "a");
    }

    #[test]
    fn test_malformed_urls_are_skipped() {
        let items = vec![
            item("broken", "https://github.com/only-project"),
            item("fine", "https://github.com/p/r/pull/3"),
        ];

        let records = normalize_items(&items, &[], 45);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, RecordKind::Pull);
    }

    #[test]
    fn test_titles_are_truncated() {
        let items = vec![item(
            "A very long issue title that keeps going",
            "https://github.com/p/r/issues/9",
        )];

        let records = normalize_items(&items, &[], 10);
        assert_eq!(records[0].title, "A very lo…");
    }
}
