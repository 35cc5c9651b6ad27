pub mod paths;
pub mod pendulum;
pub mod step;
pub mod switches;

pub use self::paths::{body_position, body_velocity};
pub use self::step::step;
