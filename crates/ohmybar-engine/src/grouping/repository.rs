use super::ordered::OrderedGroups;
use super::{GroupingOptions, join_with_separators, leaf};
use crate::pad::{NodeKind, pad};
use ohmybar_types::{GroupKey, GroupNode, GroupingSpec, MenuNode, Record, RecordKind, Show};

struct RepoBucket<'a> {
    key: &'a GroupKey,
    issues: Vec<&'a Record>,
    pulls: Vec<&'a Record>,
}

struct ProjectBucket<'a> {
    key: &'a GroupKey,
    repos: OrderedGroups<&'a str, RepoBucket<'a>>,
}

/// Resolved pads for one build
struct Layout {
    spec: GroupingSpec,
    group: usize,
    section: usize,
    leaf: usize,
    render_types: bool,
}

impl Layout {
    fn new(spec: GroupingSpec, show: Show) -> Self {
        Self {
            spec,
            group: pad(NodeKind::GroupHeader, &spec),
            section: pad(NodeKind::TypeHeader, &spec),
            // Leaves keep the type depth even when `show` hides the type headers
            leaf: pad(NodeKind::Leaf, &spec),
            render_types: show == Show::All && spec.group_by_type,
        }
    }
}

/// Issues and pull requests grouped project → repository → type.
///
/// Records need a project and a repository group key; records without
/// them are skipped. Records filtered out by `show` never create groups,
/// so projects and repositories without visible records are omitted.
pub fn build_repository_tree(
    records: &[Record],
    spec: GroupingSpec,
    options: &GroupingOptions,
) -> Vec<MenuNode> {
    let layout = Layout::new(spec.for_repositories(), options.show);
    let mut projects: OrderedGroups<&str, ProjectBucket<'_>> = OrderedGroups::new();

    for record in records.iter().filter(|record| options.show.includes(record.kind)) {
        let (Some(project), Some(repo)) = (record.group(0), record.group(1)) else {
            tracing::debug!("skipping record without project/repo: {}", record.href);
            continue;
        };

        let bucket = projects
            .entry(project.key.as_str(), || ProjectBucket {
                key: project,
                repos: OrderedGroups::new(),
            })
            .repos
            .entry(repo.key.as_str(), || RepoBucket {
                key: repo,
                issues: Vec::new(),
                pulls: Vec::new(),
            });

        match record.kind {
            RecordKind::Pull => bucket.pulls.push(record),
            RecordKind::Issue | RecordKind::Bookmark => bucket.issues.push(record),
        }
    }

    let blocks = projects
        .into_vec()
        .into_iter()
        .map(|project| vec![MenuNode::from(project_node(project, &layout, options))]);

    join_with_separators(blocks, options.separator(layout.spec.group_by_project, 0))
}

fn project_node(project: ProjectBucket<'_>, layout: &Layout, options: &GroupingOptions) -> GroupNode {
    let mut node = GroupNode::new(&project.key.label)
        .href(project.key.href.clone())
        .pad(0);
    if let Some(size) = options.project_size {
        node = node.size(size);
    }

    let repos = project
        .repos
        .into_vec()
        .into_iter()
        .map(|repo| vec![MenuNode::from(repo_node(repo, layout, options))]);

    node.children = join_with_separators(
        repos,
        options.separator(layout.spec.group_by_repo, layout.group),
    );
    node
}

fn repo_node(repo: RepoBucket<'_>, layout: &Layout, options: &GroupingOptions) -> GroupNode {
    let mut node = GroupNode::new(&repo.key.label)
        .href(repo.key.href.clone())
        .pad(layout.group);
    if let Some(size) = options.repo_size {
        node = node.size(size);
    }

    let sections = [("Issues", repo.issues), ("Pulls", repo.pulls)]
        .into_iter()
        .map(|(title, records)| section(title, &records, layout));

    node.children = join_with_separators(
        sections,
        options.separator(layout.spec.group_by_type, layout.section),
    );
    node
}

/// One type's records, under an "Issues"/"Pulls" header when types are shown
fn section(title: &str, records: &[&Record], layout: &Layout) -> Vec<MenuNode> {
    let leaves = records
        .iter()
        .map(|record| MenuNode::from(leaf(record, layout.leaf)));

    if !layout.render_types {
        return leaves.collect();
    }
    if records.is_empty() {
        return Vec::new();
    }

    let mut header = GroupNode::new(title).pad(layout.section);
    header.children = leaves.collect();
    vec![header.into()]
}
