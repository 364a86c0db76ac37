pub mod root;
pub mod health;
pub mod error;

pub use root::*;
pub use health::*;
pub use error::*;
