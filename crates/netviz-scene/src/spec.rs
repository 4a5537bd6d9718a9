//! Entity descriptions produced by the scenario parser.
//!
//! Specs are plain data in simulator coordinates. The scene converts them
//! into live [`Node`](crate::Node) and [`Decoration`](crate::Decoration)
//! state when they are added.

use netviz_core::{DecorationId, NodeId, Orientation, Rgb, Vec3};
use serde::{Deserialize, Serialize};

fn default_scale() -> f32 {
    1.0
}

fn default_visible() -> bool {
    true
}

/// Initial description of a node.
///
/// # Examples
///
/// ```
/// use netviz_core::{NodeId, Rgb, Vec3};
/// use netviz_scene::NodeSpec;
///
/// let spec = NodeSpec::new(NodeId(3))
///     .with_position(Vec3::new(10.0, 5.0, 0.0))
///     .with_base_color(Rgb::new(200, 0, 0));
///
/// assert_eq!(spec.id, NodeId(3));
/// assert_eq!(spec.highlight_color, None);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    /// Stable ID from the source file.
    pub id: NodeId,
    /// Model reference resolved by the renderer.
    #[serde(default)]
    pub model: Option<String>,
    /// Display label.
    #[serde(default)]
    pub label: Option<String>,
    /// Initial position, simulator frame.
    #[serde(default)]
    pub position: Vec3,
    /// Initial orientation.
    #[serde(default)]
    pub orientation: Orientation,
    /// Uniform model scale.
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Initial base color override.
    #[serde(default)]
    pub base_color: Option<Rgb>,
    /// Initial highlight color override.
    #[serde(default)]
    pub highlight_color: Option<Rgb>,
    /// Whether the renderer draws the node.
    #[serde(default = "default_visible")]
    pub visible: bool,
}

impl NodeSpec {
    /// A visible, unscaled, uncolored node at the origin.
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            model: None,
            label: None,
            position: Vec3::ZERO,
            orientation: Orientation::IDENTITY,
            scale: 1.0,
            base_color: None,
            highlight_color: None,
            visible: true,
        }
    }

    /// Set the initial position, simulator frame.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set the initial orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the initial base color.
    pub fn with_base_color(mut self, color: Rgb) -> Self {
        self.base_color = Some(color);
        self
    }

    /// Set the initial highlight color.
    pub fn with_highlight_color(mut self, color: Rgb) -> Self {
        self.highlight_color = Some(color);
        self
    }

    /// Set the model reference.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Initial description of a decoration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecorationSpec {
    /// Stable ID from the source file.
    pub id: DecorationId,
    /// Model reference resolved by the renderer.
    #[serde(default)]
    pub model: Option<String>,
    /// Initial position, simulator frame.
    #[serde(default)]
    pub position: Vec3,
    /// Initial orientation.
    #[serde(default)]
    pub orientation: Orientation,
    /// Uniform model scale.
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Whether the renderer draws the decoration.
    #[serde(default = "default_visible")]
    pub visible: bool,
}

impl DecorationSpec {
    /// A visible, unscaled decoration at the origin.
    pub fn new(id: DecorationId) -> Self {
        Self {
            id,
            model: None,
            position: Vec3::ZERO,
            orientation: Orientation::IDENTITY,
            scale: 1.0,
            visible: true,
        }
    }

    /// Set the initial position, simulator frame.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }
}
