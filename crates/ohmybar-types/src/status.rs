use serde::Deserialize;
use std::collections::HashMap;

/// One entry of the `statuses` configuration list.
///
/// Either a `[status, color]` pair or a named group of statuses sharing a
/// color.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StatusSpec {
    Single(String, String),
    Group {
        group_title: String,
        statuses: Vec<String>,
        color: String,
    },
}

impl StatusSpec {
    pub fn single(status: &str, color: &str) -> Self {
        StatusSpec::Single(status.to_string(), color.to_string())
    }
}

/// Display metadata for an allowed status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    pub display_group: String,
    pub color: String,
    /// Position of the originating status entry in the configuration list
    pub sort_index: usize,
}

/// Allow-list of statuses keyed by lower-cased status name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusMap {
    entries: HashMap<String, StatusEntry>,
}

impl StatusMap {
    pub fn from_specs(specs: &[StatusSpec]) -> Self {
        let mut entries = HashMap::new();

        for (sort_index, spec) in specs.iter().enumerate() {
            match spec {
                StatusSpec::Single(status, color) => {
                    entries.insert(
                        status.to_lowercase(),
                        StatusEntry {
                            display_group: status.clone(),
                            color: color.clone(),
                            sort_index,
                        },
                    );
                }
                StatusSpec::Group {
                    group_title,
                    statuses,
                    color,
                } => {
                    for status in statuses {
                        entries.insert(
                            status.to_lowercase(),
                            StatusEntry {
                                display_group: group_title.clone(),
                                color: color.clone(),
                                sort_index,
                            },
                        );
                    }
                }
            }
        }

        Self { entries }
    }

    /// Look up a status; matching is case-insensitive
    pub fn get(&self, status: &str) -> Option<&StatusEntry> {
        self.entries.get(&status.to_lowercase())
    }

    pub fn contains(&self, status: &str) -> bool {
        self.get(status).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        statuses: Vec<StatusSpec>,
    }

    #[test]
    fn test_status_map_from_mixed_specs() {
        let holder: Holder = toml::from_str(
            r##"
statuses = [
    ["Blocked", "#ff0000"],
    { group_title = "Review", statuses = ["Code review", "QA"], color = "#90b000" },
]
"##,
        )
        .unwrap();

        let map = StatusMap::from_specs(&holder.statuses);
        assert_eq!(map.len(), 3);

        let blocked = map.get("BLOCKED").unwrap();
        assert_eq!(blocked.display_group, "Blocked");
        assert_eq!(blocked.sort_index, 0);

        let qa = map.get("qa").unwrap();
        assert_eq!(qa.display_group, "Review");
        assert_eq!(qa.color, "#90b000");
        assert_eq!(qa.sort_index, 1);
        assert_eq!(map.get("code review"), Some(qa));
    }

    #[test]
    fn test_unknown_status_is_not_allowed() {
        let map = StatusMap::from_specs(&[StatusSpec::single("To Do", "#1f77ff")]);
        assert!(map.contains("to do"));
        assert!(!map.contains("done"));
    }
}
