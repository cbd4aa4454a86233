pub mod round;
pub use round::*;

pub mod error;
pub use error::*;

pub mod admin;
pub use admin::*;

pub mod constants;
pub use constants::*;

pub mod event;
pub use event::*;
