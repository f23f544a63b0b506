pub mod cli;
pub mod locator;

pub use cli::AzCli;
pub use locator::locate_az;
