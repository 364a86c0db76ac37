pub mod root;
pub mod health;
pub mod fallback;

pub use root::*;
pub use health::*;
pub use fallback::*;
