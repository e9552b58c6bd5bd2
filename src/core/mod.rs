pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod list;
pub mod log;
pub mod reset;
pub mod summary;
