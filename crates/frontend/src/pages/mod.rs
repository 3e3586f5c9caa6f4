pub mod home;
pub mod quickstart;
