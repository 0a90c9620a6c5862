//! HTTP Handlers

mod category;
mod question;
mod quiz;
mod system;

pub use category::*;
pub use question::*;
pub use quiz::*;
pub use system::*;
