//! Menu tree handed from the grouping engine to the renderer.
//!
//! `pad` is the number of indentation units a line is prefixed with. A node
//! without an explicit pad takes the one its render context provides.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuNode {
    Group(GroupNode),
    Item(LeafItem),
    Separator(Separator),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupNode {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pad: Option<usize>,
    pub children: Vec<MenuNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeafItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pad: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Separator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pad: Option<usize>,
}

impl GroupNode {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn href(mut self, href: Option<String>) -> Self {
        self.href = href;
        self
    }

    pub fn color(mut self, color: Option<String>) -> Self {
        self.color = color;
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn pad(mut self, pad: usize) -> Self {
        self.pad = Some(pad);
        self
    }

    pub fn push(&mut self, node: impl Into<MenuNode>) {
        self.children.push(node.into());
    }
}

impl LeafItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn color(mut self, color: Option<String>) -> Self {
        self.color = color;
        self
    }

    pub fn pad(mut self, pad: usize) -> Self {
        self.pad = Some(pad);
        self
    }
}

impl Separator {
    pub fn at(pad: usize) -> Self {
        Self { pad: Some(pad) }
    }
}

impl From<GroupNode> for MenuNode {
    fn from(node: GroupNode) -> Self {
        MenuNode::Group(node)
    }
}

impl From<LeafItem> for MenuNode {
    fn from(item: LeafItem) -> Self {
        MenuNode::Item(item)
    }
}

impl From<Separator> for MenuNode {
    fn from(separator: Separator) -> Self {
        MenuNode::Separator(separator)
    }
}

impl MenuNode {
    pub fn pad(&self) -> Option<usize> {
        match self {
            MenuNode::Group(group) => group.pad,
            MenuNode::Item(item) => item.pad,
            MenuNode::Separator(separator) => separator.pad,
        }
    }

    pub fn children(&self) -> &[MenuNode] {
        match self {
            MenuNode::Group(group) => &group.children,
            MenuNode::Item(_) | MenuNode::Separator(_) => &[],
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, MenuNode::Separator(_))
    }

    /// Number of leaf items in this subtree
    pub fn leaf_count(&self) -> usize {
        match self {
            MenuNode::Group(group) => group.children.iter().map(MenuNode::leaf_count).sum(),
            MenuNode::Item(_) => 1,
            MenuNode::Separator(_) => 0,
        }
    }
}
