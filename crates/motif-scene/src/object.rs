use serde::{Deserialize, Serialize};

use crate::asset::AssetId;
use motif_core::{Color, Point2D, Rect, Size2D, Transform2D};

/// Unique identifier for a visual object within a scene.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub String);

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ObjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The kind of content an object holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Plain prose text.
    Text,
    /// A mathematical formula (TeX source, typeset by the back-end).
    Formula,
    /// A geometric shape.
    Shape,
    /// An externally authored image.
    Image,
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectKind::Text => write!(f, "text"),
            ObjectKind::Formula => write!(f, "formula"),
            ObjectKind::Shape => write!(f, "shape"),
            ObjectKind::Image => write!(f, "image"),
        }
    }
}

/// Text styling passed to the back-end for typesetting and measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Nominal line height in scene units.
    pub size: f64,
    pub color: Color,
}

impl TextStyle {
    pub fn new(size: f64, color: Color) -> Self {
        Self { size, color }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 1.0,
            color: Color::WHITE,
        }
    }
}

/// Shape variant for shape objects. Dimensions are intrinsic extents in
/// scene units; the back-end owns the actual geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle {
        radius: f64,
    },
    Ellipse {
        width: f64,
        height: f64,
    },
    Rect {
        width: f64,
        height: f64,
    },
    RoundedRect {
        width: f64,
        height: f64,
        corner_radius: f64,
    },
    /// A straight segment between two points in scene units.
    Line {
        from: Point2D,
        to: Point2D,
    },
    /// A circular arc. Angles in radians.
    Arc {
        radius: f64,
        start_angle: f64,
        angle: f64,
    },
    /// A filled circular sector. Angles in radians.
    Sector {
        radius: f64,
        start_angle: f64,
        angle: f64,
    },
    Dot {
        radius: f64,
    },
    RegularPolygon {
        sides: u32,
        radius: f64,
    },
    /// Coordinate axes spanning the given lengths, centered at the position.
    Axes {
        x_length: f64,
        y_length: f64,
    },
    /// A horizontal number line from `from` to `to`, drawn at `length` units.
    NumberLine {
        from: f64,
        to: f64,
        length: f64,
    },
    /// A horizontal brace of the given width.
    Brace {
        width: f64,
    },
}

impl ShapeKind {
    /// Intrinsic extent of the shape before any scaling.
    pub fn extent(&self) -> Size2D {
        match self {
            ShapeKind::Circle { radius } | ShapeKind::Dot { radius } => {
                Size2D::new(radius * 2.0, radius * 2.0)
            }
            ShapeKind::Ellipse { width, height } | ShapeKind::Rect { width, height } => {
                Size2D::new(*width, *height)
            }
            ShapeKind::RoundedRect { width, height, .. } => Size2D::new(*width, *height),
            ShapeKind::Line { from, to } => {
                Size2D::new((to.x - from.x).abs(), (to.y - from.y).abs())
            }
            ShapeKind::Arc { radius, .. } | ShapeKind::Sector { radius, .. } => {
                Size2D::new(radius * 2.0, radius * 2.0)
            }
            ShapeKind::RegularPolygon { radius, .. } => Size2D::new(radius * 2.0, radius * 2.0),
            ShapeKind::Axes { x_length, y_length } => Size2D::new(*x_length, *y_length),
            ShapeKind::NumberLine { length, .. } => Size2D::new(*length, 0.5),
            ShapeKind::Brace { width } => Size2D::new(*width, 0.3),
        }
    }
}

/// The content of a visual object — what the back-end renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectContent {
    Text { text: String, style: TextStyle },
    Formula { tex: String, style: TextStyle },
    Shape { kind: ShapeKind },
    Image { asset_id: AssetId },
}

/// Object-level styling independent of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Stroke/primary color.
    pub color: Color,
    /// Fill opacity for filled shapes (0.0 = outline only).
    pub fill_opacity: f64,
    /// Stroke width in scene units.
    pub stroke_width: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            fill_opacity: 0.0,
            stroke_width: 0.04,
        }
    }
}

impl Style {
    pub fn stroke(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    pub fn filled(color: Color, fill_opacity: f64) -> Self {
        Self {
            color,
            fill_opacity,
            ..Default::default()
        }
    }

    /// Linear interpolation between two styles.
    pub fn lerp(&self, other: &Style, t: f64) -> Style {
        Style {
            color: self.color.lerp(&other.color, t as f32),
            fill_opacity: self.fill_opacity + (other.fill_opacity - self.fill_opacity) * t,
            stroke_width: self.stroke_width + (other.stroke_width - self.stroke_width) * t,
        }
    }
}

/// A visual object: identity, content, geometric pose, style, and measured
/// extent. Owned exclusively by the scene that declared it; the registry
/// holds the single mutable copy and hands out lookups by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualObject {
    pub id: ObjectId,
    pub content: ObjectContent,
    pub pose: Transform2D,
    pub style: Style,
    /// Unscaled extent in scene units (text extents come from the back-end).
    pub extent: Size2D,
    /// Objects start hidden and are revealed by a FadeIn/Write step.
    pub visible: bool,
}

impl VisualObject {
    pub fn new(id: impl Into<ObjectId>, content: ObjectContent, extent: Size2D) -> Self {
        let style = match &content {
            ObjectContent::Text { style, .. } | ObjectContent::Formula { style, .. } => {
                Style::stroke(style.color)
            }
            _ => Style::default(),
        };
        Self {
            id: id.into(),
            content,
            pose: Transform2D::identity(),
            style,
            extent,
            visible: false,
        }
    }

    /// A shape object with extent taken from the shape's intrinsic geometry.
    pub fn shape(id: impl Into<ObjectId>, kind: ShapeKind) -> Self {
        let extent = kind.extent();
        Self::new(id, ObjectContent::Shape { kind }, extent)
    }

    pub fn kind(&self) -> ObjectKind {
        match &self.content {
            ObjectContent::Text { .. } => ObjectKind::Text,
            ObjectContent::Formula { .. } => ObjectKind::Formula,
            ObjectContent::Shape { .. } => ObjectKind::Shape,
            ObjectContent::Image { .. } => ObjectKind::Image,
        }
    }

    /// Builder: set position.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.pose.position = Point2D::new(x, y);
        self
    }

    /// Builder: set uniform scale.
    pub fn scaled(mut self, factor: f64) -> Self {
        self.pose.scale = Point2D::new(factor, factor);
        self
    }

    /// Builder: set style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Effective extent after applying the pose's scale factors.
    pub fn scaled_extent(&self) -> Size2D {
        Size2D::new(
            self.extent.width * self.pose.scale.x,
            self.extent.height * self.pose.scale.y,
        )
    }

    /// The object's bounding rectangle in scene coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pose.position, self.scaled_extent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_creation() {
        let obj = VisualObject::new(
            "title",
            ObjectContent::Text {
                text: "Hello".into(),
                style: TextStyle::default(),
            },
            Size2D::new(2.5, 1.0),
        );
        assert_eq!(obj.id.0, "title");
        assert_eq!(obj.kind(), ObjectKind::Text);
        assert!(!obj.visible);
    }

    #[test]
    fn test_shape_intrinsic_extent() {
        let obj = VisualObject::shape("c", ShapeKind::Circle { radius: 2.0 });
        assert!((obj.extent.width - 4.0).abs() < 1e-9);
        assert!((obj.extent.height - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_scaled_extent_and_bounds() {
        let obj = VisualObject::shape(
            "r",
            ShapeKind::Rect {
                width: 2.0,
                height: 1.0,
            },
        )
        .at(1.0, 0.0)
        .scaled(2.0);
        let bounds = obj.bounds();
        assert!((bounds.size.width - 4.0).abs() < 1e-9);
        assert!((bounds.left() - -1.0).abs() < 1e-9);
        assert!((bounds.right() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_line_extent() {
        let kind = ShapeKind::Line {
            from: Point2D::new(-1.0, 0.0),
            to: Point2D::new(2.0, 4.0),
        };
        let extent = kind.extent();
        assert!((extent.width - 3.0).abs() < 1e-9);
        assert!((extent.height - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_text_object_takes_style_color() {
        let obj = VisualObject::new(
            "t",
            ObjectContent::Text {
                text: "x".into(),
                style: TextStyle::new(1.0, Color::BLUE),
            },
            Size2D::new(0.5, 1.0),
        );
        assert_eq!(obj.style.color, Color::BLUE);
    }
}
