//! Stream velocity fields sampled on a discrete latitude/longitude grid,
//! and bilinear interpolation of those fields at arbitrary points.

pub mod field;
pub mod interpolate;

pub use field::StreamField;
pub use field::StreamFieldBuilder;
pub use field::StreamFieldBuilderError;
pub use interpolate::InterpolationError;
pub use interpolate::Sector;
