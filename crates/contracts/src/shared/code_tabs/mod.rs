//! Labeled code tab groups.
//!
//! Input arrives as a list of [`TabNode`]s. [`filter_tabs`] keeps the tab
//! carriers and resolves each one against the [`LanguageRegistry`] into a
//! [`TabEntry`]; [`render`] turns the entries into a [`TabbedView`] that the
//! frontend maps onto its tab and code display widgets. [`build_group`] does
//! both without failing, returning the renderable tabs next to any errors.
//! Cross-group tab selection lives in [`SelectionStore`].

pub mod error;
pub mod filter;
pub mod node;
pub mod registry;
pub mod selection;
pub mod view;

pub use error::CodeTabsError;
pub use filter::{filter_tabs, partition_tabs, TabEntry, PLAINTEXT};
pub use node::{TabBody, TabCarrier, TabNode};
pub use registry::{LanguageRegistry, LanguageSpec};
pub use selection::SelectionStore;
pub use view::{build_group, render, BuiltGroup, CodeBlockSpec, DuplicatePolicy, TabView, TabbedView};
