//! Device pixel to logical unit conversion.
//!
//! Pointer input arrives in physical pixels while every shape lives in
//! logical units (DIPs). The scale is fixed once per session; live DPI
//! changes are not tracked.

use egui::Pos2;

use crate::error::{Axis, ScaleError};

/// Reference DPI at which one logical unit equals one pixel.
pub const BASE_DPI: f32 = 96.0;

/// Converts device pixel coordinates into logical drawing units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateScaler {
    scale_x: f32,
    scale_y: f32,
}

impl Default for CoordinateScaler {
    fn default() -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

impl CoordinateScaler {
    /// Creates a scaler from per-axis factors (pixels per logical unit).
    pub fn new(scale_x: f32, scale_y: f32) -> Result<Self, ScaleError> {
        Ok(Self {
            scale_x: validate(Axis::X, scale_x)?,
            scale_y: validate(Axis::Y, scale_y)?,
        })
    }

    /// Creates a scaler from the display's reported DPI.
    pub fn from_dpi(dpi_x: f32, dpi_y: f32) -> Result<Self, ScaleError> {
        Self::new(dpi_x / BASE_DPI, dpi_y / BASE_DPI)
    }

    /// Creates a uniform scaler from egui's `pixels_per_point`.
    pub fn from_pixels_per_point(pixels_per_point: f32) -> Result<Self, ScaleError> {
        Self::new(pixels_per_point, pixels_per_point)
    }

    pub fn scale_x(&self) -> f32 {
        self.scale_x
    }

    pub fn scale_y(&self) -> f32 {
        self.scale_y
    }

    pub fn to_logical_x(&self, pixel_x: f32) -> f32 {
        pixel_x / self.scale_x
    }

    pub fn to_logical_y(&self, pixel_y: f32) -> f32 {
        pixel_y / self.scale_y
    }

    /// Converts a pixel position into logical units.
    pub fn to_logical(&self, pixel: Pos2) -> Pos2 {
        Pos2::new(self.to_logical_x(pixel.x), self.to_logical_y(pixel.y))
    }
}

fn validate(axis: Axis, value: f32) -> Result<f32, ScaleError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ScaleError::InvalidFactor { axis, value })
    }
}
