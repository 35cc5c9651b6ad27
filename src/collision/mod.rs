pub mod bsp;
pub mod sweep;

pub use self::bsp::{test_body, test_world, Contact};
pub use self::sweep::{SweepHit, LARGE, SMALL};
