pub mod address;
pub use address::*;

pub mod vault;
pub use vault::*;
