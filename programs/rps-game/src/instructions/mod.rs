pub mod initialize_global_state;
pub use initialize_global_state::*;

pub mod update_global_state;
pub use update_global_state::*;

pub mod create_round;
pub use create_round::*;

pub mod join_round;
pub use join_round::*;

pub mod play;
pub use play::*;

pub mod claim;
pub use claim::*;
