pub mod config;
pub mod family;
pub mod template;

pub use config::*;
pub use family::*;
pub use template::*;
