//! Geometry and color types.
//!
//! Positions use [`glam::Vec3`]. Scenario files describe positions in the
//! simulator's right-handed, z-up frame; entity state stores them in the
//! renderer's y-up frame via [`sim_to_render`].

use serde::{Deserialize, Serialize};
use std::fmt;

pub use glam::Vec3;
use glam::Quat;

/// Convert a simulator-frame position (z up) to the render frame (y up).
///
/// `(x, y, z) -> (x, z, -y)`.
#[inline]
pub fn sim_to_render(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.z, -v.y)
}

/// Per-axis rotation angles in degrees.
///
/// The angles are kept exactly as supplied so that restoring a saved
/// orientation is bit-exact. The combined rotation is only built for the
/// renderer, composing the axes in x, then y, then z order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    /// Rotation about the x axis, degrees.
    pub x: f32,
    /// Rotation about the y axis, degrees.
    pub y: f32,
    /// Rotation about the z axis, degrees.
    pub z: f32,
}

impl Orientation {
    /// No rotation.
    pub const IDENTITY: Orientation = Orientation {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Build an orientation from per-axis degrees.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// The render-frame rotation: `Rx * Ry * Rz`.
    pub fn to_quat(self) -> Quat {
        Quat::from_rotation_x(self.x.to_radians())
            * Quat::from_rotation_y(self.y.to_radians())
            * Quat::from_rotation_z(self.z.to_radians())
    }

    /// The angles as bit patterns, for exact hashing.
    pub fn to_bits(self) -> [u32; 3] {
        [self.x.to_bits(), self.y.to_bits(), self.z.to_bits()]
    }
}

/// An 8-bit-per-channel RGB color.
///
/// "No color" is expressed as `Option<Rgb>::None` at every use site;
/// black is a valid color, not a sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Build a color from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels normalized to `[0, 1]`, for shader uniforms.
    pub fn to_linear(self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Axis-aligned scene bounding box, in simulator coordinates.
///
/// Used only by the renderer (camera framing, ground plane sizing).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Bounds {
    /// Whether `min <= max` holds on every axis and all values are finite.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min.cmple(self.max).all()
    }

    /// Center point.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Box half-extents.
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }
}
