//! Assembly of the full menu document.
//!
//! Header, quick links, then every enabled plugin. A failing plugin is
//! replaced by an error line and never stops the others.

use crate::config::{Config, DEFAULT_HEADER};
use ohmybar_engine::quick_links;
use ohmybar_providers::{FetchContext, HttpClient};
use ohmybar_types::{GroupNode, LeafItem, MenuNode, Separator};
use std::error::Error as StdError;

pub const ERROR_COLOR: &str = "red";

/// Menu lines must not break the line protocol
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Red line naming the failed source; with `verbose` the cause chain is
/// attached as a submenu.
pub fn error_node(source: &str, err: &(dyn StdError + 'static), verbose: bool) -> MenuNode {
    let title = single_line(&format!("{}: {}", source, err));
    let color = Some(ERROR_COLOR.to_string());

    if !verbose {
        return LeafItem::new(title).color(color).pad(0).into();
    }

    let mut node = GroupNode::new(title).color(color).pad(0);
    let mut cause = err.source();
    while let Some(err) = cause {
        node.push(LeafItem::new(single_line(&err.to_string())));
        cause = err.source();
    }
    node.into()
}

fn preamble(header: &str) -> Vec<MenuNode> {
    vec![LeafItem::new(header).pad(0).into(), Separator::at(0).into()]
}

/// Menu shown when the configuration itself cannot be used
pub fn error_menu(err: &(dyn StdError + 'static), verbose: bool) -> Vec<MenuNode> {
    let mut nodes = preamble(DEFAULT_HEADER);
    nodes.push(error_node("config", err, verbose));
    nodes
}

pub async fn build_menu(config: &Config) -> Vec<MenuNode> {
    let mut nodes = preamble(&config.header);

    if let Some(links) = &config.quick_links {
        nodes.extend(quick_links(links));
        nodes.push(Separator::at(0).into());
    }

    let plugins = config.plugins.active();
    if plugins.is_empty() {
        return nodes;
    }

    let http = match HttpClient::new(config.http.clone()) {
        Ok(http) => http,
        Err(err) => {
            tracing::warn!("http client unavailable: {}", err);
            nodes.push(error_node("http", &err, config.verbose));
            return nodes;
        }
    };
    let ctx = FetchContext {
        http: &http,
        item_length: config.item_length,
    };

    for plugin in plugins {
        match plugin.render(&ctx).await {
            Ok(output) => nodes.extend(output),
            Err(err) => {
                tracing::warn!(plugin = plugin.name(), "plugin failed: {}", err);
                nodes.push(error_node(plugin.name(), &err, config.verbose));
            }
        }
    }

    nodes
}
