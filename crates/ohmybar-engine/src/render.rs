//! Serializes menu trees into the xbar line protocol.
//!
//! Each node becomes one line, `<prefix><title>` optionally followed by
//! ` | key=value ...`. The prefix is `-` repeated `pad` times; the host
//! derives submenu depth from it.

use crate::pad::PAD_UNIT;
use ohmybar_types::{GroupNode, LeafItem, MenuNode};
use std::borrow::Cow;
use std::io::{self, Write};

pub const SEPARATOR: &str = "---";

/// Stand-ins for characters the host reads as syntax inside a title
const BAR_STAND_IN: char = '¦';
const DASH_STAND_IN: char = '‐';

/// Pad inherited by nodes that do not set their own.
///
/// Passed by value through the recursion, so a subtree's pad never
/// leaks into its siblings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderContext {
    pub pad: usize,
}

impl RenderContext {
    pub fn at(pad: usize) -> Self {
        Self { pad }
    }

    fn resolve(self, explicit: Option<usize>) -> Self {
        Self {
            pad: explicit.unwrap_or(self.pad),
        }
    }

    fn nested(self) -> Self {
        Self {
            pad: self.pad + PAD_UNIT,
        }
    }
}

/// Optional line attributes, in output order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineAttributes<'a> {
    pub color: Option<&'a str>,
    pub href: Option<&'a str>,
    pub size: Option<u32>,
    pub image: Option<&'a str>,
}

impl<'a> From<&'a GroupNode> for LineAttributes<'a> {
    fn from(node: &'a GroupNode) -> Self {
        Self {
            color: node.color.as_deref(),
            href: node.href.as_deref(),
            size: node.size,
            image: node.image.as_deref(),
        }
    }
}

impl<'a> From<&'a LeafItem> for LineAttributes<'a> {
    fn from(item: &'a LeafItem) -> Self {
        Self {
            color: item.color.as_deref(),
            href: item.href.as_deref(),
            size: item.size,
            image: item.image.as_deref(),
        }
    }
}

impl LineAttributes<'_> {
    fn to_suffix(self) -> String {
        let mut parts = Vec::new();
        if let Some(color) = self.color {
            parts.push(format!("color={}", color));
        }
        if let Some(href) = self.href {
            parts.push(format!("href={}", href));
        }
        if let Some(size) = self.size {
            parts.push(format!("size={}", size));
        }
        if let Some(image) = self.image {
            parts.push(format!("templateImage={}", image));
        }
        parts.join(" ")
    }
}

/// Keep a title from being read as attributes or as extra depth.
///
/// `|` starts the attribute list and leading dashes set the submenu depth.
pub fn escape_title(title: &str) -> Cow<'_, str> {
    if !title.starts_with('-') && !title.contains('|') {
        return Cow::Borrowed(title);
    }

    let body = title.trim_start_matches('-');
    let dashes = title.len() - body.len();
    let mut escaped: String = std::iter::repeat_n(DASH_STAND_IN, dashes).collect();
    escaped.extend(body.chars().map(|c| if c == '|' { BAR_STAND_IN } else { c }));
    Cow::Owned(escaped)
}

pub fn format_line(pad: usize, title: &str, attributes: LineAttributes<'_>) -> String {
    let prefix = "-".repeat(pad);
    let title = escape_title(title);
    let suffix = attributes.to_suffix();

    if suffix.is_empty() {
        format!("{}{}", prefix, title)
    } else {
        format!("{}{} | {}", prefix, title, suffix)
    }
}

/// Render top-level nodes, depth first
pub fn render_lines(nodes: &[MenuNode]) -> Vec<String> {
    let mut lines = Vec::new();
    render_nodes(nodes, RenderContext::default(), &mut lines);
    lines
}

pub fn render_to<W: Write>(nodes: &[MenuNode], writer: &mut W) -> io::Result<()> {
    for line in render_lines(nodes) {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

fn render_nodes(nodes: &[MenuNode], ctx: RenderContext, lines: &mut Vec<String>) {
    for node in nodes {
        render_node(node, ctx, lines);
    }
}

fn render_node(node: &MenuNode, ctx: RenderContext, lines: &mut Vec<String>) {
    let ctx = ctx.resolve(node.pad());

    match node {
        MenuNode::Group(group) => {
            lines.push(format_line(ctx.pad, &group.title, group.into()));
            render_nodes(&group.children, ctx.nested(), lines);
        }
        MenuNode::Item(item) => lines.push(format_line(ctx.pad, &item.title, item.into())),
        MenuNode::Separator(_) => lines.push(format!("{}{}", "-".repeat(ctx.pad), SEPARATOR)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ohmybar_types::Separator;

    #[test]
    fn test_line_without_attributes() {
        assert_eq!(format_line(0, "Title", LineAttributes::default()), "Title");
        assert_eq!(format_line(4, "", LineAttributes::default()), "----");
    }

    #[test]
    fn test_attribute_order() {
        let attributes = LineAttributes {
            color: Some("#ff0000"),
            href: Some("https://example.com"),
            size: Some(14),
            image: Some("aGVsbG8="),
        };
        assert_eq!(
            format_line(2, "Repo", attributes),
            "--Repo | color=#ff0000 href=https://example.com size=14 templateImage=aGVsbG8="
        );
    }

    #[test]
    fn test_titles_cannot_inject_depth_or_attributes() {
        let href = LineAttributes {
            href: Some("https://example.com/1"),
            ..LineAttributes::default()
        };
        assert_eq!(
            format_line(2, "--force is ignored", href),
            "--‐‐force is ignored | href=https://example.com/1"
        );
        assert_eq!(
            format_line(0, "a | color=red", LineAttributes::default()),
            "a ¦ color=red"
        );
        assert_eq!(format_line(0, "---", LineAttributes::default()), "‐‐‐");
        assert_eq!(escape_title("re-run"), "re-run");
    }

    #[test]
    fn test_children_inherit_nested_pad() {
        let mut inner = GroupNode::new("inner");
        inner.push(LeafItem::new("deep"));

        let mut outer = GroupNode::new("outer");
        outer.push(inner);
        outer.push(LeafItem::new("explicit").pad(0));
        outer.push(Separator::default());

        let nodes = vec![outer.into(), LeafItem::new("sibling").into()];
        assert_eq!(
            render_lines(&nodes),
            vec!["outer", "--inner", "----deep", "explicit", "-----", "sibling"]
        );
    }

    #[test]
    fn test_explicit_group_pad_shifts_its_children() {
        let mut group = GroupNode::new("group").pad(4);
        group.push(LeafItem::new("child"));

        assert_eq!(render_lines(&[group.into()]), vec!["----group", "------child"]);
    }

    #[test]
    fn test_render_to_writer() {
        let nodes = vec![
            LeafItem::new("a").into(),
            Separator::at(0).into(),
            LeafItem::new("b").href("https://b.test").into(),
        ];
        let mut out = Vec::new();
        render_to(&nodes, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "a\n---\nb | href=https://b.test\n");
    }
}
