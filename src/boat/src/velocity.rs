use driftrs_stream::interpolate::interpolate;
use driftrs_stream::InterpolationError;
use driftrs_stream::StreamField;
use thiserror::Error;

/// A velocity expressed as coordinate rates, latitude component first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    pub dlat: f64,
    pub dlon: f64,
}

#[derive(Error, Debug)]
pub enum VelocityError {
    #[error("interpolation error: {0}")]
    InterpolationError(#[from] InterpolationError),
    #[error("stream field must hold exactly 2 velocity components, found {0}")]
    StreamComponents(usize),
}

/// Boat velocity plus the stream velocity interpolated at the boat position.
/// The stream field must hold 2 components, ordered like [`Velocity`].
pub fn compose(
    boat: &Velocity,
    lat: f64,
    lon: f64,
    stream: &StreamField,
) -> Result<Velocity, VelocityError> {
    if stream.ncomp() != 2 {
        return Err(VelocityError::StreamComponents(stream.ncomp()));
    }
    let drift = interpolate(stream, lat, lon)?;
    Ok(Velocity {
        dlat: boat.dlat + drift[0],
        dlon: boat.dlon + drift[1],
    })
}
