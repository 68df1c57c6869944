use crate::velocity::compose;
use crate::velocity::Velocity;
use crate::velocity::VelocityError;
use driftrs_stream::StreamField;

/// A boat position in grid coordinates (degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

/// Advance the boat by one explicit Euler step through the stream field.
///
/// The composed velocity is sampled once at the starting position and held
/// constant over the step, so `ts` must be small enough that the stream is
/// effectively uniform across the displacement; no sub-stepping.
pub fn advance(
    boat: &Velocity,
    lat: f64,
    lon: f64,
    stream: &StreamField,
    ts: f64,
) -> Result<Position, VelocityError> {
    let velocity = compose(boat, lat, lon, stream)?;
    Ok(Position {
        lat: lat + velocity.dlat * ts,
        lon: lon + velocity.dlon * ts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use driftrs_stream::StreamField;
    use driftrs_stream::StreamFieldBuilder;
    use ndarray::array;

    fn unit_cell_stream() -> StreamField {
        StreamFieldBuilder::default()
            .values(array![[[0., 0.], [0., 1.]], [[2., 0.], [2., 1.]]])
            .latitudes(array![0., 1.])
            .longitudes(array![0., 1.])
            .build()
            .unwrap()
    }

    fn still_water(extent: f64) -> StreamField {
        StreamField::from_fn(
            array![-extent, extent],
            array![-extent, extent],
            2,
            |_, _, _| 0.,
        )
        .unwrap()
    }

    #[test]
    fn test_zero_timestep_keeps_the_position() {
        let stream = unit_cell_stream();
        let boat = Velocity { dlat: 3., dlon: -2. };
        let position = advance(&boat, 0.25, 0.75, &stream, 0.).unwrap();
        assert_relative_eq!(position.lat, 0.25, epsilon = 1e-12);
        assert_relative_eq!(position.lon, 0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_unit_step_from_the_grid_origin() {
        // the stream is zero at (0, 0), so the boat moves on its own velocity
        let stream = unit_cell_stream();
        let boat = Velocity { dlat: 1., dlon: 0. };
        let position = advance(&boat, 0., 0., &stream, 1.).unwrap();
        assert_relative_eq!(position.lat, 1., epsilon = 1e-12);
        assert_relative_eq!(position.lon, 0., epsilon = 1e-12);
    }

    #[test]
    fn test_latitude_offset_does_not_leak_into_longitude() {
        // each axis must advance from its own coordinate: a boat sitting far
        // north with no velocity stays put instead of jumping east
        let stream = still_water(10.);
        let boat = Velocity { dlat: 0., dlon: 0. };
        let position = advance(&boat, 5., 0., &stream, 1.).unwrap();
        assert_relative_eq!(position.lat, 5., epsilon = 1e-12);
        assert_relative_eq!(position.lon, 0., epsilon = 1e-12);
    }

    #[test]
    fn test_each_axis_advances_independently() {
        let stream = still_water(10.);
        let boat = Velocity {
            dlat: 0.5,
            dlon: 0.25,
        };
        let position = advance(&boat, 2.5, -1.5, &stream, 2.).unwrap();
        assert_relative_eq!(position.lat, 3.5, epsilon = 1e-12);
        assert_relative_eq!(position.lon, -1., epsilon = 1e-12);
    }

    #[test]
    fn test_step_fails_outside_the_stream_coverage() {
        let stream = unit_cell_stream();
        let boat = Velocity { dlat: 1., dlon: 0. };
        assert!(advance(&boat, 4., 0.5, &stream, 1.).is_err());
    }

    #[test]
    fn test_drift_with_the_stream() {
        // boat dead in the water at the cell center: after one unit step it
        // has moved exactly by the interpolated stream velocity [1.0, 0.5]
        let stream = unit_cell_stream();
        let boat = Velocity { dlat: 0., dlon: 0. };
        let position = advance(&boat, 0.5, 0.5, &stream, 1.).unwrap();
        assert_relative_eq!(position.lat, 1.5, epsilon = 1e-12);
        assert_relative_eq!(position.lon, 1., epsilon = 1e-12);
    }
}
