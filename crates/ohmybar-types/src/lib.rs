pub mod error;
pub mod grouping;
pub mod menu;
pub mod record;
pub mod status;
mod util;

pub use error::{Error, Result};
pub use grouping::{GroupDepth, GroupingSpec, Show};
pub use menu::{GroupNode, LeafItem, MenuNode, Separator};
pub use record::{GroupKey, Record, RecordKind};
pub use status::{StatusEntry, StatusMap, StatusSpec};
pub use util::*;
