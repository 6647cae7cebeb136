//! One-shot coverage correction for the `fit` subcommand.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use framing::fit::{Placement, covers, fit};
use framing::geometry::{Dimensions, Point};
use framing::rescale::min_cover_scale;
use serde::Serialize;

/// Inputs of a single fit run. Missing scale means minimum cover; missing
/// offset means centred in the border.
#[derive(Debug, Clone, Copy)]
pub struct FitRequest {
    pub border: Dimensions,
    pub original: Dimensions,
    pub rotation: f64,
    pub offset: Option<Point>,
    pub scale: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FitReport {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
    pub x_offset: f64,
    pub y_offset: f64,
    pub rotation: f64,
    pub covers: bool,
}

#[must_use]
pub fn fit_report(req: &FitRequest) -> FitReport {
    let scale = req.scale.unwrap_or_else(|| min_cover_scale(req.border, req.original));
    let dimensions = req.original.scaled(scale);
    let offset = req.offset.unwrap_or_else(|| req.border.half() - dimensions.half());

    let start = Placement { dimensions, offset, rotation: req.rotation };
    let out = fit(&start, req.border, req.original.ratio());

    FitReport {
        width: out.dimensions.width,
        height: out.dimensions.height,
        scale: if req.original.width > 0.0 { out.dimensions.width / req.original.width } else { scale },
        x_offset: out.offset.x,
        y_offset: out.offset.y,
        rotation: out.rotation,
        covers: covers(&out, req.border),
    }
}

/// Parse `"X,Y"`.
pub fn parse_point(raw: &str) -> Result<Point, String> {
    let (x, y) = raw.split_once(',').ok_or_else(|| format!("expected X,Y, got {raw:?}"))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad x in {raw:?}: {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad y in {raw:?}: {e}"))?;
    Ok(Point::new(x, y))
}
