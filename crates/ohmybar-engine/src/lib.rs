// Engine module - grouping, indentation and rendering
// This layer sits between normalized records (types) and the runtime's menu assembly

pub mod grouping;
pub mod pad;
pub mod quick_links;
pub mod render;

pub use grouping::{GroupingOptions, build_item_list, build_repository_tree, build_status_tree};
pub use pad::{NodeKind, PAD_UNIT, pad};
pub use quick_links::quick_links;
pub use render::{
    LineAttributes, RenderContext, SEPARATOR, escape_title, format_line, render_lines, render_to,
};
