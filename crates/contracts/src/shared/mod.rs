pub mod code_tabs;
pub mod config;
