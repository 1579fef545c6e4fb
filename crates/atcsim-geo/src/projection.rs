//! Geographic projection: converts between lat/lon and canvas pixels.
//!
//! Linear in both axes over a small bounding box (tens of nautical miles).
//! No distortion correction; x grows east, y grows south.

use glam::DVec2;
use serde::Serialize;

use atcsim_core::constants::KM_PER_NM;
use atcsim_core::error::BoundsError;
use atcsim_core::settings::RadarArea;
use atcsim_core::types::{CanvasSize, GeoPoint};

use crate::geodesy::{destination, haversine_km};

/// Rectangle in decimal degrees the scope covers.
///
/// Always non-degenerate: `min_lat < max_lat` and `min_lon < max_lon`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoBounds {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

impl GeoBounds {
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Result<Self, BoundsError> {
        let finite = [min_lat, max_lat, min_lon, max_lon]
            .iter()
            .all(|v| v.is_finite());
        if !finite || min_lat >= max_lat || min_lon >= max_lon {
            return Err(BoundsError::Degenerate {
                min_lat,
                max_lat,
                min_lon,
                max_lon,
            });
        }
        Ok(Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        })
    }

    /// Box spanned by two opposite corners, in any order.
    pub fn from_corners(a: GeoPoint, b: GeoPoint) -> Result<Self, BoundsError> {
        Self::new(
            a.lat.min(b.lat),
            a.lat.max(b.lat),
            a.lon.min(b.lon),
            a.lon.max(b.lon),
        )
    }

    /// Box reaching `range_nm` north, south, east and west of `center`.
    pub fn from_center_range(center: GeoPoint, range_nm: f64) -> Result<Self, BoundsError> {
        if !(range_nm.is_finite() && range_nm > 0.0) {
            return Err(BoundsError::InvalidRange(range_nm));
        }
        let km = range_nm * KM_PER_NM;
        let north = destination(center, 0.0, km);
        let south = destination(center, 180.0, km);
        let east = destination(center, 90.0, km);
        let west = destination(center, 270.0, km);
        Self::new(south.lat, north.lat, west.lon, east.lon)
    }

    pub fn from_area(area: &RadarArea) -> Result<Self, BoundsError> {
        match area {
            RadarArea::Corners { corners } => Self::from_corners(corners[0], corners[1]),
            RadarArea::CenterRange { center, range_nm } => {
                Self::from_center_range(*center, *range_nm)
            }
        }
    }

    pub fn min_lat(&self) -> f64 {
        self.min_lat
    }

    pub fn max_lat(&self) -> f64 {
        self.max_lat
    }

    pub fn min_lon(&self) -> f64 {
        self.min_lon
    }

    pub fn max_lon(&self) -> f64 {
        self.max_lon
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.lat)
            && (self.min_lon..=self.max_lon).contains(&point.lon)
    }
}

/// Projection of a `GeoBounds` onto a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoProjection {
    bounds: GeoBounds,
    canvas: CanvasSize,
}

impl GeoProjection {
    pub fn new(bounds: GeoBounds, canvas: CanvasSize) -> Self {
        Self { bounds, canvas }
    }

    pub fn bounds(&self) -> &GeoBounds {
        &self.bounds
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Same bounds, different canvas.
    pub fn with_canvas(&self, canvas: CanvasSize) -> Self {
        Self::new(self.bounds, canvas)
    }

    /// Convert lat/lon (degrees) to canvas pixels.
    pub fn to_pixel(&self, lat: f64, lon: f64) -> DVec2 {
        let b = &self.bounds;
        let x = (lon - b.min_lon) / (b.max_lon - b.min_lon) * self.canvas.width;
        let y = (b.max_lat - lat) / (b.max_lat - b.min_lat) * self.canvas.height;
        DVec2::new(x, y)
    }

    /// Convert canvas pixels back to lat/lon (degrees).
    pub fn to_geo(&self, pixel: DVec2) -> GeoPoint {
        let b = &self.bounds;
        let lon = b.min_lon + pixel.x / self.canvas.width * (b.max_lon - b.min_lon);
        let lat = b.max_lat - pixel.y / self.canvas.height * (b.max_lat - b.min_lat);
        GeoPoint::new(lat, lon)
    }

    pub fn point_to_pixel(&self, point: GeoPoint) -> DVec2 {
        self.to_pixel(point.lat, point.lon)
    }

    /// Kilometers-per-pixel scale for this bounds/canvas pair.
    pub fn scale(&self) -> PixelScale {
        PixelScale::new(&self.bounds, self.canvas)
    }
}

/// Ground distance represented by one pixel on each axis.
///
/// The projection is not aspect-corrected, so the two axes differ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelScale {
    pub km_per_px_x: f64,
    pub km_per_px_y: f64,
}

impl PixelScale {
    pub fn new(bounds: &GeoBounds, canvas: CanvasSize) -> Self {
        let mid = bounds.center();
        let width_km = haversine_km(
            GeoPoint::new(mid.lat, bounds.min_lon),
            GeoPoint::new(mid.lat, bounds.max_lon),
        );
        let height_km = haversine_km(
            GeoPoint::new(bounds.min_lat, mid.lon),
            GeoPoint::new(bounds.max_lat, mid.lon),
        );
        Self {
            km_per_px_x: width_km / canvas.width,
            km_per_px_y: height_km / canvas.height,
        }
    }

    /// Pixel offset for a ground displacement of `km` on true bearing
    /// `bearing_deg`.
    pub fn offset(&self, bearing_deg: f64, km: f64) -> DVec2 {
        let theta = bearing_deg.to_radians();
        DVec2::new(
            theta.sin() * km / self.km_per_px_x,
            -theta.cos() * km / self.km_per_px_y,
        )
    }
}
