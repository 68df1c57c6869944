pub mod motion;
pub mod plot;
pub mod velocity;

pub use motion::advance;
pub use motion::Position;
pub use velocity::compose;
pub use velocity::Velocity;
pub use velocity::VelocityError;
