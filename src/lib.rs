pub mod math;
pub mod core;
pub mod collision;
pub mod dynamics;
pub mod regions;

/// Re-export common types for easier usage
pub use crate::core::{World, Ball, Body, Path, Lump, LumpFlags, Item, ItemKind};
pub use crate::dynamics::step;
pub use crate::math::{Basis, Vector3};
pub use crate::regions::{goal_hit, item_hit, jump_state, switch_event, JumpState};

/// Error types for the simulation core
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum SimError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),
    }
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, error::SimError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
