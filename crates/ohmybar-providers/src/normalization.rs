use crate::{Error, Result};
use ohmybar_types::{Record, strip_scheme};

/// Host, project and repository segments of a resource URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath<'a> {
    pub host: &'a str,
    pub project: &'a str,
    pub repo: &'a str,
    /// Segment after the repository, e.g. `issues` or `pull`
    pub resource: Option<&'a str>,
}

impl ResourcePath<'_> {
    pub fn project_url(&self) -> String {
        format!("https://{}/{}", self.host, self.project)
    }

    pub fn repo_url(&self) -> String {
        format!("https://{}/{}/{}", self.host, self.project, self.repo)
    }

    pub fn is_pull_request(&self) -> bool {
        matches!(self.resource, Some("pull" | "pulls"))
    }
}

/// Split `https://host/project/repo/...` into its leading segments.
pub fn split_resource_url(url: &str) -> Result<ResourcePath<'_>> {
    let mut segments = strip_scheme(url).split('/');

    match (segments.next(), segments.next(), segments.next()) {
        (Some(host), Some(project), Some(repo))
            if !host.is_empty() && !project.is_empty() && !repo.is_empty() =>
        {
            Ok(ResourcePath {
                host,
                project,
                repo,
                resource: segments.next().filter(|segment| !segment.is_empty()),
            })
        }
        _ => Err(Error::Normalization(format!(
            "expected host/project/repo in URL: {}",
            url
        ))),
    }
}

/// Case-insensitive lookup key for a status name
pub fn normalize_status(status: &str) -> String {
    status.trim().to_lowercase()
}

pub fn is_excluded(project: &str, exclude_projects: &[String]) -> bool {
    exclude_projects.iter().any(|excluded| excluded == project)
}

/// Normalize a batch, dropping filtered (`Ok(None)`) and malformed entries.
///
/// Malformed entries are logged and skipped; the rest of the batch is kept
/// in its original order.
pub fn normalize_all<T, F>(raw: &[T], mut normalize: F) -> Vec<Record>
where
    F: FnMut(&T) -> Result<Option<Record>>,
{
    let mut records = Vec::with_capacity(raw.len());

    for item in raw {
        match normalize(item) {
            Ok(Some(record)) => records.push(record),
            Ok(None) => {}
            Err(err) => tracing::debug!("skipping record: {}", err),
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use ohmybar_types::RecordKind;

    #[test]
    fn test_split_resource_url() {
        let path = split_resource_url("https://git.example.com/projA/repoX/issues/1").unwrap();
        assert_eq!(path.host, "git.example.com");
        assert_eq!(path.project, "projA");
        assert_eq!(path.repo, "repoX");
        assert_eq!(path.project_url(), "https://git.example.com/projA");
        assert_eq!(path.repo_url(), "https://git.example.com/projA/repoX");
        assert_eq!(path.resource, Some("issues"));
        assert!(!path.is_pull_request());
    }

    #[test]
    fn test_pull_requests_are_detected_by_resource_segment() {
        for url in [
            "https://github.com/acme/api/pull/7",
            "https://git.example.com/projA/repoY/pulls/2",
        ] {
            assert!(split_resource_url(url).unwrap().is_pull_request(), "{}", url);
        }
        for url in [
            "https://github.com/acme/pulley/issues/4",
            "https://github.com/pull-org/api/issues/5",
            "https://github.com/acme/api",
        ] {
            assert!(!split_resource_url(url).unwrap().is_pull_request(), "{}", url);
        }
    }

    #[test]
    fn test_split_resource_url_without_scheme() {
        let path = split_resource_url("git.example.com/a/b").unwrap();
        assert_eq!((path.host, path.project, path.repo), ("git.example.com", "a", "b"));
    }

    #[test]
    fn test_split_resource_url_rejects_short_paths() {
        for url in [
            "https://git.example.com/projA",
            "https://git.example.com/projA/",
            "https://git.example.com",
            "",
        ] {
            let err = split_resource_url(url).unwrap_err();
            assert!(matches!(err, Error::Normalization(_)), "{}", url);
            assert!(!err.is_fetch_failure());
        }
    }

    #[test]
    fn test_normalize_status() {
        assert_eq!(normalize_status(" In Progress "), "in progress");
    }

    #[test]
    fn test_is_excluded() {
        let excluded = vec!["archive".to_string()];
        assert!(is_excluded("archive", &excluded));
        assert!(!is_excluded("Archive", &excluded));
    }

    #[test]
    fn test_normalize_all_skips_bad_entries_in_order() {
        let raw = ["a", "bad", "skip", "b"];
        let records = normalize_all(&raw, |item| match *item {
            "bad" => Err(Error::Normalization("bad".into())),
            "skip" => Ok(None),
            title => Ok(Some(Record::new(title, "https://x", RecordKind::Issue))),
        });

        let titles: Vec<_> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b"]);
    }
}
