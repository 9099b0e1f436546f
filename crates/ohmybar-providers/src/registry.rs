/// The fixed set of plugins a configuration can enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginKind {
    IssueTracker,
    SourceHost,
    Bookmarks,
}

#[derive(Debug, Clone)]
pub struct PluginMetadata {
    pub kind: PluginKind,
    /// Table name under `[plugins]` in the config file
    pub name: &'static str,
    pub description: &'static str,
}

const PLUGINS: &[PluginMetadata] = &[
    PluginMetadata {
        kind: PluginKind::IssueTracker,
        name: "jira",
        description: "Jira tickets assigned to you",
    },
    PluginMetadata {
        kind: PluginKind::SourceHost,
        name: "github",
        description: "Open GitHub issues and pull requests you authored",
    },
    PluginMetadata {
        kind: PluginKind::Bookmarks,
        name: "bookmarks",
        description: "Chromium bookmarks bar",
    },
];

pub fn get_all_plugins() -> &'static [PluginMetadata] {
    PLUGINS
}

impl PluginKind {
    pub fn metadata(&self) -> &'static PluginMetadata {
        PLUGINS
            .iter()
            .find(|meta| meta.kind == *self)
            .unwrap_or(&PLUGINS[0])
    }

    pub fn name(&self) -> &'static str {
        self.metadata().name
    }
}
