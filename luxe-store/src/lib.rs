pub mod app_config;
pub mod directory;
pub mod seed;

pub use directory::{DirectoryStore, StoreError};
pub use seed::seed;
