//! CLI command implementations

pub mod clean;
pub mod config;
pub mod install;
pub mod list;

pub use clean::execute as clean;
pub use config::execute as config;
pub use install::execute as install;
pub use list::execute as list;
