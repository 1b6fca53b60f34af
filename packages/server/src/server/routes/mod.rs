// HTTP routes
pub mod health;
pub mod waitlist;

pub use health::*;
pub use waitlist::*;
