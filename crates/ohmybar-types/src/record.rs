use serde::Serialize;

/// What a record stands for on the remote side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Issue,
    Pull,
    Bookmark,
}

/// One grouping dimension of a record (project, repository, status).
///
/// `key` decides which records share a group; `label` and `href` are what
/// the group header shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupKey {
    pub key: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl GroupKey {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            href: None,
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

/// Normalized unit of work, independent of the provider it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub title: String,
    pub href: String,
    pub group_keys: Vec<GroupKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub kind: RecordKind,
}

impl Record {
    pub fn new(title: impl Into<String>, href: impl Into<String>, kind: RecordKind) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            group_keys: Vec::new(),
            status: None,
            kind,
        }
    }

    pub fn with_group(mut self, key: GroupKey) -> Self {
        self.group_keys.push(key);
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Group key at a given depth (0 = project, 1 = repository or status)
    pub fn group(&self, depth: usize) -> Option<&GroupKey> {
        self.group_keys.get(depth)
    }

    pub fn project(&self) -> Option<&GroupKey> {
        self.group(0)
    }
}
