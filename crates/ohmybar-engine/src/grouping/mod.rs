//! Re-projects flat record lists into menu trees.
//!
//! Groups always exist in the tree; whether a dimension looks nested is
//! decided only by the pads from [`crate::pad`]. Dimensions that are not
//! nested get separators between their blocks when enabled.

mod ordered;
mod repository;
mod status;

pub use repository::build_repository_tree;
pub use status::build_status_tree;

use ohmybar_types::{LeafItem, MenuNode, Record, Separator, Show};

/// Plugin options that shape a tree beyond its grouping spec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupingOptions {
    pub use_separators: bool,
    pub show: Show,
    pub project_size: Option<u32>,
    pub repo_size: Option<u32>,
}

impl GroupingOptions {
    /// Separator pad for a dimension, if one is wanted between its blocks
    pub(crate) fn separator(&self, nested: bool, pad: usize) -> Option<usize> {
        (self.use_separators && !nested).then_some(pad)
    }
}

/// Concatenate blocks, with a separator between consecutive non-empty
/// blocks when `separator` is set. Never leading, never trailing.
pub(crate) fn join_with_separators(
    blocks: impl IntoIterator<Item = Vec<MenuNode>>,
    separator: Option<usize>,
) -> Vec<MenuNode> {
    let mut joined = Vec::new();

    for block in blocks.into_iter().filter(|block| !block.is_empty()) {
        if let Some(pad) = separator
            && !joined.is_empty()
        {
            joined.push(Separator::at(pad).into());
        }
        joined.extend(block);
    }

    joined
}

pub(crate) fn leaf(record: &Record, pad: usize) -> LeafItem {
    LeafItem::new(&record.title).href(&record.href).pad(pad)
}

/// Records as plain links, without grouping.
pub fn build_item_list(records: &[Record]) -> Vec<MenuNode> {
    records
        .iter()
        .map(|record| LeafItem::new(&record.title).href(&record.href).into())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(titles: &[&str]) -> Vec<MenuNode> {
        titles.iter().map(|title| LeafItem::new(*title).into()).collect()
    }

    #[test]
    fn test_separators_only_between_blocks() {
        let joined = join_with_separators(
            vec![block(&["a"]), Vec::new(), block(&["b", "c"]), block(&["d"]), Vec::new()],
            Some(2),
        );

        let separators: Vec<usize> = joined
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_separator())
            .map(|(position, _)| position)
            .collect();
        assert_eq!(separators, vec![1, 4]);
        assert_eq!(joined[1].pad(), Some(2));
        assert!(!joined.last().unwrap().is_separator());
    }

    #[test]
    fn test_no_separator_requested() {
        let joined = join_with_separators(vec![block(&["a"]), block(&["b"])], None);
        assert_eq!(joined.len(), 2);
    }

    #[test]
    fn test_separator_only_for_flattened_dimensions() {
        let options = GroupingOptions {
            use_separators: true,
            ..GroupingOptions::default()
        };
        assert_eq!(options.separator(false, 4), Some(4));
        assert_eq!(options.separator(true, 4), None);
        assert_eq!(GroupingOptions::default().separator(false, 0), None);
    }
}
