pub mod apply;
pub mod families;
pub mod styles;
pub mod validate;

pub use apply::*;
pub use families::*;
pub use styles::*;
pub use validate::*;
