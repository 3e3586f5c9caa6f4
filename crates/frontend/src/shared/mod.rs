pub mod code_tabs;
pub mod components;
pub mod icons;
