// Error types
pub mod error;

// Shared HTTP plumbing
pub mod http;

// Trait-based architecture (public API)
pub mod traits;

// Provider implementations
pub mod bookmarks;
pub mod github;
pub mod jira;

// URL/status normalization shared by providers
pub mod normalization;

// Plugin registry
pub mod registry;

// Traits
pub use traits::{FetchContext, Provider};

// Provider configs
pub use bookmarks::BookmarksConfig;
pub use github::GithubConfig;
pub use jira::{JiraConfig, TicketLinks};

// HTTP
pub use http::{Auth, HttpClient, HttpSettings};

// Registry
pub use registry::{PluginKind, PluginMetadata, get_all_plugins};

// Error types
pub use error::{Error, Result};
