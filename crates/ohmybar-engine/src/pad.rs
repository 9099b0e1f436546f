use ohmybar_types::GroupingSpec;

/// Indentation added per nested menu level
pub const PAD_UNIT: usize = 2;

/// Kinds of nodes whose indentation depends on the grouping mode.
///
/// Project headers are always at the top level and are not listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Repository header
    GroupHeader,
    /// Issues/Pulls or status header
    TypeHeader,
    /// Issue, pull request or ticket
    Leaf,
}

/// Indentation of a node kind under a grouping spec.
///
/// Every nested dimension above a node adds one [`PAD_UNIT`].
pub fn pad(kind: NodeKind, spec: &GroupingSpec) -> usize {
    let unit = |nested: bool| if nested { PAD_UNIT } else { 0 };

    let group = unit(spec.group_by_project);
    let section = group + unit(spec.group_by_repo);

    match kind {
        NodeKind::GroupHeader => group,
        NodeKind::TypeHeader => section,
        NodeKind::Leaf => section + unit(spec.nests_sections()),
    }
}
