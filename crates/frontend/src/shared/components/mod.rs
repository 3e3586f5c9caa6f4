pub mod homepage_features;
pub mod terminal_box;
