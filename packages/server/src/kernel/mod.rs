//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use deps::{NotionAdapter, ResendAdapter, ServerDeps};
pub use test_dependencies::{MockNotifier, MockRecordStore, RecordCallArgs, TestDependencies};
pub use traits::*;
