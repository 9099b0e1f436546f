//! Plugins: a provider plus the menu layout of its records.

use ohmybar_engine::{GroupingOptions, build_item_list, build_repository_tree, build_status_tree};
use ohmybar_providers::{
    BookmarksConfig, FetchContext, GithubConfig, JiraConfig, PluginKind, Provider, TicketLinks,
};
use ohmybar_types::{LeafItem, MenuNode, Record, Show};

/// Project header size for issue-tracker tickets in flat mode
const FLAT_PROJECT_SIZE: u32 = 32;
const SOURCE_PROJECT_SIZE: u32 = 16;
const SOURCE_REPO_SIZE: u32 = 14;

/// A provider that also knows how its records are laid out.
pub trait Plugin: Provider {
    /// Optional header shown above the plugin's output
    fn title(&self) -> Option<&str>;

    fn layout(&self, records: &[Record]) -> Vec<MenuNode>;
}

impl Plugin for JiraConfig {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn layout(&self, records: &[Record]) -> Vec<MenuNode> {
        let spec = self.group_depth.spec();
        let options = GroupingOptions {
            use_separators: self.use_separators,
            show: Show::All,
            project_size: spec.for_statuses().is_flat().then_some(FLAT_PROJECT_SIZE),
            repo_size: None,
        };
        build_status_tree(records, spec, &self.status_map(), &options, |statuses| {
            self.status_filter(statuses)
        })
    }
}

impl Plugin for GithubConfig {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn layout(&self, records: &[Record]) -> Vec<MenuNode> {
        let options = GroupingOptions {
            use_separators: self.use_separators,
            show: self.show,
            project_size: Some(SOURCE_PROJECT_SIZE),
            repo_size: Some(SOURCE_REPO_SIZE),
        };
        build_repository_tree(records, self.group_depth.spec(), &options)
    }
}

impl Plugin for BookmarksConfig {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn layout(&self, records: &[Record]) -> Vec<MenuNode> {
        build_item_list(records)
    }
}

/// An enabled plugin, borrowed from the configuration.
#[derive(Debug, Clone, Copy)]
pub enum ActivePlugin<'a> {
    IssueTracker(&'a JiraConfig),
    SourceHost(&'a GithubConfig),
    Bookmarks(&'a BookmarksConfig),
}

impl ActivePlugin<'_> {
    pub fn kind(&self) -> PluginKind {
        match self {
            ActivePlugin::IssueTracker(config) => config.kind(),
            ActivePlugin::SourceHost(config) => config.kind(),
            ActivePlugin::Bookmarks(config) => config.kind(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            ActivePlugin::IssueTracker(config) => config.title(),
            ActivePlugin::SourceHost(config) => config.title(),
            ActivePlugin::Bookmarks(config) => config.title(),
        }
    }

    pub async fn fetch(&self, ctx: &FetchContext<'_>) -> ohmybar_providers::Result<Vec<Record>> {
        match self {
            ActivePlugin::IssueTracker(config) => config.fetch(ctx).await,
            ActivePlugin::SourceHost(config) => config.fetch(ctx).await,
            ActivePlugin::Bookmarks(config) => config.fetch(ctx).await,
        }
    }

    pub fn layout(&self, records: &[Record]) -> Vec<MenuNode> {
        match self {
            ActivePlugin::IssueTracker(config) => config.layout(records),
            ActivePlugin::SourceHost(config) => config.layout(records),
            ActivePlugin::Bookmarks(config) => config.layout(records),
        }
    }

    /// Fetch and lay out, with the title header first when configured
    pub async fn render(&self, ctx: &FetchContext<'_>) -> ohmybar_providers::Result<Vec<MenuNode>> {
        let records = self.fetch(ctx).await?;

        let mut nodes = Vec::new();
        if let Some(title) = self.title() {
            nodes.push(LeafItem::new(title).pad(0).into());
        }
        nodes.extend(self.layout(&records));
        Ok(nodes)
    }
}
