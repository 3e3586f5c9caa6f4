pub mod code_block;
pub mod code_tabs;
pub mod context;
pub mod highlight;

pub use code_block::CodeBlock;
pub use code_tabs::CodeTabs;
pub use context::{use_docs, use_tab_sync, DocsContext, TabSyncContext};
