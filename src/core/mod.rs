pub mod catalogue_cache;
pub mod config;
pub mod hook;
pub mod loader;
pub mod registry;
pub mod resolver;

pub use catalogue_cache::*;
pub use config::*;
pub use hook::*;
pub use loader::*;
pub use registry::*;
pub use resolver::*;
