use super::ordered::OrderedGroups;
use super::{GroupingOptions, join_with_separators, leaf};
use crate::pad::{NodeKind, pad};
use ohmybar_types::{GroupKey, GroupNode, GroupingSpec, MenuNode, Record, StatusEntry, StatusMap};
use std::cmp::Reverse;

struct StatusBucket<'a> {
    entry: &'a StatusEntry,
    /// Distinct status names merged into this entry, first-seen order
    members: Vec<&'a str>,
    tickets: Vec<&'a Record>,
}

impl<'a> StatusBucket<'a> {
    fn add(&mut self, status: &'a str, ticket: &'a Record) {
        if !self.members.contains(&status) {
            self.members.push(status);
        }
        self.tickets.push(ticket);
    }
}

struct ProjectTickets<'a> {
    key: &'a GroupKey,
    statuses: OrderedGroups<usize, StatusBucket<'a>>,
}

/// Tickets grouped project → status.
///
/// Only statuses present in `statuses` are shown; statuses sharing an
/// entry merge into one group. Status groups are ordered by descending
/// sort index, ties keeping first-seen order. `status_link` receives every
/// status name merged into a header and returns the header's link.
pub fn build_status_tree<F>(
    records: &[Record],
    spec: GroupingSpec,
    statuses: &StatusMap,
    options: &GroupingOptions,
    status_link: F,
) -> Vec<MenuNode>
where
    F: Fn(&[&str]) -> Option<String>,
{
    let spec = spec.for_statuses();
    let header_pad = pad(NodeKind::TypeHeader, &spec);
    let leaf_pad = pad(NodeKind::Leaf, &spec);

    let mut projects: OrderedGroups<&str, ProjectTickets<'_>> = OrderedGroups::new();

    for record in records {
        let Some(project) = record.project() else {
            tracing::debug!("skipping ticket without project: {}", record.href);
            continue;
        };
        let status_key = record.group(1);
        let status = record
            .status
            .as_deref()
            .or(status_key.map(|key| key.key.as_str()))
            .unwrap_or_default();
        let status_name = status_key.map_or(status, |key| key.label.as_str());
        let Some(entry) = statuses.get(status) else {
            tracing::debug!("status {:?} not listed, hiding {}", status, record.title);
            continue;
        };

        projects
            .entry(project.key.as_str(), || ProjectTickets {
                key: project,
                statuses: OrderedGroups::new(),
            })
            .statuses
            .entry(entry.sort_index, || StatusBucket {
                entry,
                members: Vec::new(),
                tickets: Vec::new(),
            })
            .add(status_name, record);
    }

    let blocks = projects.into_vec().into_iter().map(|project| {
        let mut node = GroupNode::new(&project.key.label)
            .href(project.key.href.clone())
            .pad(0);
        if let Some(size) = options.project_size {
            node = node.size(size);
        }

        let mut buckets = project.statuses.into_vec();
        buckets.sort_by_key(|bucket| Reverse(bucket.entry.sort_index));

        let sections = buckets.into_iter().map(|bucket| {
            let href = status_link(&bucket.members);
            vec![MenuNode::from(status_node(bucket, href, header_pad, leaf_pad))]
        });
        node.children = join_with_separators(
            sections,
            options.separator(spec.group_by_status, header_pad),
        );

        vec![MenuNode::from(node)]
    });

    join_with_separators(blocks, options.separator(spec.group_by_project, 0))
}

fn status_node(
    bucket: StatusBucket<'_>,
    href: Option<String>,
    header_pad: usize,
    leaf_pad: usize,
) -> GroupNode {
    let color = Some(bucket.entry.color.clone());
    let mut node = GroupNode::new(&bucket.entry.display_group)
        .color(color.clone())
        .href(href)
        .pad(header_pad);

    node.children = bucket
        .tickets
        .iter()
        .map(|ticket| leaf(ticket, leaf_pad).color(color.clone()).into())
        .collect();
    node
}
