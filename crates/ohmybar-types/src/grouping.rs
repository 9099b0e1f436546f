use crate::{Error, RecordKind, Result};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Grouping mode as written in the configuration (`group_depth`).
///
/// Unrecognized values deserialize to [`GroupDepth::Flat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum GroupDepth {
    #[default]
    Flat,
    ByProject,
    ByRepo,
    ByStatus,
    ByProjectRepo,
    ByProjectType,
    ByProjectRepoType,
    ByProjectStatus,
}

impl GroupDepth {
    pub const ALL: [GroupDepth; 8] = [
        GroupDepth::Flat,
        GroupDepth::ByProject,
        GroupDepth::ByRepo,
        GroupDepth::ByStatus,
        GroupDepth::ByProjectRepo,
        GroupDepth::ByProjectType,
        GroupDepth::ByProjectRepoType,
        GroupDepth::ByProjectStatus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupDepth::Flat => "flat",
            GroupDepth::ByProject => "by-project",
            GroupDepth::ByRepo => "by-repo",
            GroupDepth::ByStatus => "by-status",
            GroupDepth::ByProjectRepo => "by-project-repo",
            GroupDepth::ByProjectType => "by-project-type",
            GroupDepth::ByProjectRepoType => "by-project-repo-type",
            GroupDepth::ByProjectStatus => "by-project-status",
        }
    }

    pub fn spec(&self) -> GroupingSpec {
        GroupingSpec::from(*self)
    }
}

impl fmt::Display for GroupDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupDepth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        GroupDepth::ALL
            .into_iter()
            .find(|depth| depth.as_str() == s)
            .ok_or_else(|| Error::UnknownVariant {
                kind: "group depth",
                value: s.to_string(),
            })
    }
}

impl From<String> for GroupDepth {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_else(|err| {
            tracing::warn!("{}, falling back to flat grouping", err);
            GroupDepth::Flat
        })
    }
}

/// Which dimensions are rendered as nested menu levels.
///
/// Dimensions left unset are flattened; separators stand in for them when
/// enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupingSpec {
    pub group_by_project: bool,
    pub group_by_repo: bool,
    pub group_by_type: bool,
    pub group_by_status: bool,
}

impl GroupingSpec {
    pub const FLAT: GroupingSpec = GroupingSpec {
        group_by_project: false,
        group_by_repo: false,
        group_by_type: false,
        group_by_status: false,
    };

    /// Grouping restricted to the dimensions repository records have.
    pub fn for_repositories(self) -> Self {
        Self {
            group_by_status: false,
            ..self
        }
    }

    /// Grouping restricted to the dimensions tracker tickets have.
    pub fn for_statuses(self) -> Self {
        Self {
            group_by_repo: false,
            group_by_type: false,
            ..self
        }
    }

    /// Whether the section level (issue/pull type or status) is nested
    pub fn nests_sections(&self) -> bool {
        self.group_by_type || self.group_by_status
    }

    pub fn is_flat(&self) -> bool {
        *self == Self::FLAT
    }
}

impl From<GroupDepth> for GroupingSpec {
    fn from(depth: GroupDepth) -> Self {
        let (project, repo, kind, status) = match depth {
            GroupDepth::Flat => (false, false, false, false),
            GroupDepth::ByProject => (true, false, false, false),
            GroupDepth::ByRepo => (false, true, false, false),
            GroupDepth::ByStatus => (false, false, false, true),
            GroupDepth::ByProjectRepo => (true, true, false, false),
            GroupDepth::ByProjectType => (true, false, true, false),
            GroupDepth::ByProjectRepoType => (true, true, true, false),
            GroupDepth::ByProjectStatus => (true, false, false, true),
        };

        GroupingSpec {
            group_by_project: project,
            group_by_repo: repo,
            group_by_type: kind,
            group_by_status: status,
        }
    }
}

/// Which repository records are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Show {
    #[default]
    All,
    Issues,
    Pulls,
}

impl Show {
    pub fn includes_issues(&self) -> bool {
        matches!(self, Show::All | Show::Issues)
    }

    pub fn includes_pulls(&self) -> bool {
        matches!(self, Show::All | Show::Pulls)
    }

    pub fn includes(&self, kind: RecordKind) -> bool {
        match kind {
            RecordKind::Issue => self.includes_issues(),
            RecordKind::Pull => self.includes_pulls(),
            RecordKind::Bookmark => true,
        }
    }
}

impl FromStr for Show {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(Show::All),
            "issues" => Ok(Show::Issues),
            "pulls" => Ok(Show::Pulls),
            other => Err(Error::UnknownVariant {
                kind: "show filter",
                value: other.to_string(),
            }),
        }
    }
}
