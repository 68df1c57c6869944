use log::debug;
use ndarray::Array1;
use ndarray::Array3;
use thiserror::Error;

/// K field components sampled on a rectilinear latitude/longitude grid.
///
/// `values` has shape (M, N, K); the coordinate vectors hold the node
/// positions, strictly increasing but not necessarily evenly spaced. For a
/// stream-velocity field K is 2, latitude rate first.
#[derive(Debug, Clone)]
pub struct StreamField {
    values: Array3<f64>,
    latitudes: Array1<f64>,
    longitudes: Array1<f64>,
}

impl StreamField {
    pub fn values(&self) -> &Array3<f64> {
        &self.values
    }
    pub fn latitudes(&self) -> &Array1<f64> {
        &self.latitudes
    }
    pub fn longitudes(&self) -> &Array1<f64> {
        &self.longitudes
    }
    pub fn nlat(&self) -> usize {
        self.latitudes.len()
    }
    pub fn nlon(&self) -> usize {
        self.longitudes.len()
    }
    pub fn ncomp(&self) -> usize {
        self.values.dim().2
    }
    /// Build a field by evaluating `f(lat, lon, k)` at every grid node.
    pub fn from_fn<F>(
        latitudes: Array1<f64>,
        longitudes: Array1<f64>,
        ncomp: usize,
        f: F,
    ) -> Result<Self, StreamFieldBuilderError>
    where
        F: Fn(f64, f64, usize) -> f64,
    {
        let values = Array3::from_shape_fn(
            (latitudes.len(), longitudes.len(), ncomp),
            |(i, j, k)| f(latitudes[i], longitudes[j], k),
        );
        StreamFieldBuilder::default()
            .values(values)
            .latitudes(latitudes)
            .longitudes(longitudes)
            .build()
    }
}

#[derive(Default)]
pub struct StreamFieldBuilder {
    values: Option<Array3<f64>>,
    latitudes: Option<Array1<f64>>,
    longitudes: Option<Array1<f64>>,
}

impl StreamFieldBuilder {
    pub fn build(&self) -> Result<StreamField, StreamFieldBuilderError> {
        let values = self
            .values
            .clone()
            .ok_or_else(|| StreamFieldBuilderError::UninitializedFieldError("values".to_string()))?;
        let latitudes = self.latitudes.clone().ok_or_else(|| {
            StreamFieldBuilderError::UninitializedFieldError("latitudes".to_string())
        })?;
        let longitudes = self.longitudes.clone().ok_or_else(|| {
            StreamFieldBuilderError::UninitializedFieldError("longitudes".to_string())
        })?;
        Self::validate(&values, &latitudes, &longitudes)?;
        debug!(
            "built {}x{}x{} stream field",
            latitudes.len(),
            longitudes.len(),
            values.dim().2
        );
        Ok(StreamField {
            values,
            latitudes,
            longitudes,
        })
    }
    pub fn values(&mut self, values: Array3<f64>) -> &mut Self {
        self.values = Some(values);
        self
    }
    pub fn latitudes(&mut self, latitudes: Array1<f64>) -> &mut Self {
        self.latitudes = Some(latitudes);
        self
    }
    pub fn longitudes(&mut self, longitudes: Array1<f64>) -> &mut Self {
        self.longitudes = Some(longitudes);
        self
    }
    fn validate(
        values: &Array3<f64>,
        latitudes: &Array1<f64>,
        longitudes: &Array1<f64>,
    ) -> Result<(), StreamFieldBuilderError> {
        Self::validate_shape(values, latitudes, longitudes)?;
        Self::validate_axis(latitudes, "latitudes")?;
        Self::validate_axis(longitudes, "longitudes")?;
        Ok(())
    }
    fn validate_shape(
        values: &Array3<f64>,
        latitudes: &Array1<f64>,
        longitudes: &Array1<f64>,
    ) -> Result<(), StreamFieldBuilderError> {
        let (nlat, nlon, _) = values.dim();
        if nlat != latitudes.len() || nlon != longitudes.len() {
            return Err(StreamFieldBuilderError::ShapeMismatch {
                nlat,
                nlon,
                latitudes: latitudes.len(),
                longitudes: longitudes.len(),
            });
        }
        Ok(())
    }
    fn validate_axis(
        coords: &Array1<f64>,
        axis: &'static str,
    ) -> Result<(), StreamFieldBuilderError> {
        if coords.len() < 2 {
            return Err(StreamFieldBuilderError::TooFewSamples {
                axis,
                len: coords.len(),
            });
        }
        // every cell must have positive width or the bilinear weights blow up
        for w in coords.windows(2) {
            if w[1] <= w[0] {
                return Err(StreamFieldBuilderError::NotStrictlyIncreasing { axis });
            }
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum StreamFieldBuilderError {
    #[error("Unitialized field on StreamFieldBuilder: {0}")]
    UninitializedFieldError(String),
    #[error("values shape ({nlat}, {nlon}, _) does not match coordinate vector lengths ({latitudes}, {longitudes})")]
    ShapeMismatch {
        nlat: usize,
        nlon: usize,
        latitudes: usize,
        longitudes: usize,
    },
    #[error("{axis} must hold at least 2 samples, found {len}")]
    TooFewSamples { axis: &'static str, len: usize },
    #[error("{axis} must be sorted in strictly increasing order")]
    NotStrictlyIncreasing { axis: &'static str },
}
