//! Base rings and the parents `ZZ` and `QQ`.
pub mod base;
pub mod parents;

pub use base::*;
pub use parents::*;
