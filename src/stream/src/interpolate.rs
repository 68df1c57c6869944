//! Bilinear interpolation of a stream field at arbitrary points.

use crate::field::StreamField;
use log::debug;
use ndarray::Array1;
use ndarray::Array3;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InterpolationError {
    #[error("{axis} value {value} is outside the covered range [{min}, {max})")]
    OutOfBounds {
        axis: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("sector step must be > 0., got {0}")]
    InvalidSectorStep(f64),
}

/// A field interpolated over a regular refinement of a single grid cell.
///
/// Node spacing is the requested sector step; both coordinate vectors start
/// at the cell's lower bound and stay strictly below its upper bound.
#[derive(Debug, Clone)]
pub struct Sector {
    pub latitudes: Array1<f64>,
    pub longitudes: Array1<f64>,
    pub values: Array3<f64>,
}

/// Interpolate the K field components at `(lat, lon)`.
///
/// Each component is blended bilinearly between the four corners of the
/// enclosing cell. The query must lie inside the half-open box
/// `[latitudes[0], latitudes[M-1]) x [longitudes[0], longitudes[N-1])`;
/// anything else fails with [`InterpolationError::OutOfBounds`] rather than
/// extrapolating.
pub fn interpolate(
    field: &StreamField,
    lat: f64,
    lon: f64,
) -> Result<Array1<f64>, InterpolationError> {
    let idx = bracket(field.latitudes(), lat, "latitude")?;
    let idy = bracket(field.longitudes(), lon, "longitude")?;
    let lats = field.latitudes();
    let lons = field.longitudes();
    let t = (lat - lats[idx]) / (lats[idx + 1] - lats[idx]);
    let u = (lon - lons[idy]) / (lons[idy + 1] - lons[idy]);
    let values = field.values();
    let mut interpolated = Array1::zeros(field.ncomp());
    for k in 0..field.ncomp() {
        interpolated[k] = blend(
            values[[idx, idy, k]],
            values[[idx, idy + 1, k]],
            values[[idx + 1, idy, k]],
            values[[idx + 1, idy + 1, k]],
            t,
            u,
        );
    }
    Ok(interpolated)
}

/// Interpolate the field over a regular sub-grid spanning the one cell that
/// encloses `(lat, lon)`, stepped by `step` on both axes.
pub fn interpolate_sector(
    field: &StreamField,
    lat: f64,
    lon: f64,
    step: f64,
) -> Result<Sector, InterpolationError> {
    if !(step > 0.) {
        return Err(InterpolationError::InvalidSectorStep(step));
    }
    let idx = bracket(field.latitudes(), lat, "latitude")?;
    let idy = bracket(field.longitudes(), lon, "longitude")?;
    let lat0 = field.latitudes()[idx];
    let lat1 = field.latitudes()[idx + 1];
    let lon0 = field.longitudes()[idy];
    let lon1 = field.longitudes()[idy + 1];
    let latitudes = Array1::range(lat0, lat1, step);
    let longitudes = Array1::range(lon0, lon1, step);
    debug!(
        "refining cell [{}, {}) x [{}, {}) into a {}x{} sector",
        lat0,
        lat1,
        lon0,
        lon1,
        latitudes.len(),
        longitudes.len()
    );
    let grid = field.values();
    let values = Array3::from_shape_fn(
        (latitudes.len(), longitudes.len(), field.ncomp()),
        |(i, j, k)| {
            let t = (latitudes[i] - lat0) / (lat1 - lat0);
            let u = (longitudes[j] - lon0) / (lon1 - lon0);
            blend(
                grid[[idx, idy, k]],
                grid[[idx, idy + 1, k]],
                grid[[idx + 1, idy, k]],
                grid[[idx + 1, idy + 1, k]],
                t,
                u,
            )
        },
    );
    Ok(Sector {
        latitudes,
        longitudes,
        values,
    })
}

/// Index of the lower node of the cell `[idx, idx + 1]` bounding `x`.
///
/// Starts at the nearest sample and steps down when that sample lies above
/// the query, so that `coords[idx] <= x <= coords[idx + 1]` always holds
/// for an in-range query.
fn bracket(coords: &Array1<f64>, x: f64, axis: &'static str) -> Result<usize, InterpolationError> {
    let n = coords.len();
    let mut idx = nearest_index(coords, x) as isize;
    if coords[idx as usize] > x {
        idx -= 1;
    }
    if idx < 0 || idx as usize + 1 >= n {
        return Err(InterpolationError::OutOfBounds {
            axis,
            value: x,
            min: coords[0],
            max: coords[n - 1],
        });
    }
    Ok(idx as usize)
}

/// Position of the sample closest to `x`, ties resolved to the first one.
fn nearest_index(coords: &Array1<f64>, x: f64) -> usize {
    let mut nearest = 0;
    let mut nearest_dist = (coords[0] - x).abs();
    for (i, &c) in coords.iter().enumerate().skip(1) {
        let dist = (c - x).abs();
        if dist < nearest_dist {
            nearest = i;
            nearest_dist = dist;
        }
    }
    nearest
}

/// Bilinear blend of the four cell corners; `t` and `u` are the normalized
/// offsets inside the cell along the latitude and longitude axes.
fn blend(v00: f64, v01: f64, v10: f64, v11: f64, t: f64, u: f64) -> f64 {
    v00 * (1. - t) * (1. - u) + v01 * (1. - t) * u + v10 * t * (1. - u) + v11 * t * u
}
