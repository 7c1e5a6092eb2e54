//! Viewport region value type.
//!
//! Mirrors the map view's visible region: a center coordinate plus a span in
//! degrees. The core only reads regions (to bound searches and to stamp a
//! destination's area); camera math stays with the renderer.

use geo::Point;

/// Latitude/longitude extent of a region, in degrees
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub lat_delta: f64,
    pub lon_delta: f64,
}

impl Span {
    pub fn new(lat_delta: f64, lon_delta: f64) -> Self {
        Self {
            lat_delta,
            lon_delta,
        }
    }
}

/// A rectangular map region: center point plus span
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub center: Point,
    pub span: Span,
}

impl Region {
    pub fn new(center_lat: f64, center_lon: f64, span: Span) -> Self {
        Self {
            center: Point::new(center_lon, center_lat),
            span,
        }
    }

    pub fn center_latitude(&self) -> f64 {
        self.center.y()
    }

    pub fn center_longitude(&self) -> f64 {
        self.center.x()
    }

    /// Whether a point lies within the region's bounding box.
    ///
    /// Plain degree comparison; does not handle antimeridian wrapping.
    pub fn contains(&self, point: Point) -> bool {
        let half_lat = self.span.lat_delta / 2.0;
        let half_lon = self.span.lon_delta / 2.0;

        (point.y() - self.center.y()).abs() <= half_lat
            && (point.x() - self.center.x()).abs() <= half_lon
    }
}
