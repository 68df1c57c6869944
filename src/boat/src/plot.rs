//! Heat-map rendering of interpolated sectors.

use driftrs_stream::Sector;
use plotly::HeatMap;
use plotly::Plot;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("sector must hold exactly 2 velocity components, found {0}")]
    SectorComponents(usize),
}

/// Write an HTML heat map of the stream speed over a 2-component sector.
/// Longitudes run along the x axis, latitudes along y.
pub fn sector_speed_html(sector: &Sector, path: &Path) -> Result<(), PlotError> {
    let ncomp = sector.values.dim().2;
    if ncomp != 2 {
        return Err(PlotError::SectorComponents(ncomp));
    }
    let x = sector.longitudes.to_vec();
    let y = sector.latitudes.to_vec();
    let z: Vec<Vec<f64>> = (0..sector.latitudes.len())
        .map(|i| {
            (0..sector.longitudes.len())
                .map(|j| sector.values[[i, j, 0]].hypot(sector.values[[i, j, 1]]))
                .collect()
        })
        .collect();
    let trace = HeatMap::new(x, y, z);
    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.write_html(path);
    Ok(())
}
