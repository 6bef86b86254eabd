use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A 2D point in scene units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Linear interpolation between two points.
    pub fn lerp(&self, other: &Point2D, t: f64) -> Point2D {
        Point2D {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point2D) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }

    /// A point on the circle of the given radius around this point.
    /// Angle is in radians, measured counter-clockwise from the +x axis.
    pub fn on_circle(&self, radius: f64, angle: f64) -> Point2D {
        Point2D {
            x: self.x + radius * angle.cos(),
            y: self.y + radius * angle.sin(),
        }
    }
}

impl Default for Point2D {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Point2D {
    type Output = Point2D;
    fn add(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2D {
    type Output = Point2D;
    fn sub(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point2D {
    type Output = Point2D;
    fn mul(self, rhs: f64) -> Point2D {
        Point2D::new(self.x * rhs, self.y * rhs)
    }
}

/// A 2D extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size2D {
    pub width: f64,
    pub height: f64,
}

impl Size2D {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Compute the aspect ratio (width / height).
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0.0 {
            return 0.0;
        }
        self.width / self.height
    }

    /// Uniformly scaled copy of this extent.
    pub fn scaled(&self, factor: f64) -> Size2D {
        Size2D::new(self.width * factor, self.height * factor)
    }
}

impl Default for Size2D {
    fn default() -> Self {
        Self::zero()
    }
}

/// An axis-aligned rectangle, given by its center and extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: Point2D,
    pub size: Size2D,
}

impl Rect {
    pub fn new(center: Point2D, size: Size2D) -> Self {
        Self { center, size }
    }

    pub fn left(&self) -> f64 {
        self.center.x - self.size.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.center.x + self.size.width / 2.0
    }

    pub fn top(&self) -> f64 {
        self.center.y + self.size.height / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.center.y - self.size.height / 2.0
    }
}

/// A 2D pose: position, scale, rotation, anchor, and opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Position of the object center in scene units.
    pub position: Point2D,
    /// Scale factors.
    pub scale: Point2D,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Anchor point (0.0–1.0 normalized, 0.5/0.5 = center).
    pub anchor: Point2D,
    /// Opacity (0.0–1.0).
    pub opacity: f64,
}

impl Transform2D {
    /// Identity pose: no translation, scale 1, no rotation, centered anchor, fully opaque.
    pub fn identity() -> Self {
        Self {
            position: Point2D::zero(),
            scale: Point2D::new(1.0, 1.0),
            rotation: 0.0,
            anchor: Point2D::new(0.5, 0.5),
            opacity: 1.0,
        }
    }

    /// Linear interpolation between two poses.
    pub fn lerp(&self, other: &Transform2D, t: f64) -> Transform2D {
        let t = t.clamp(0.0, 1.0);
        Transform2D {
            position: self.position.lerp(&other.position, t),
            scale: self.scale.lerp(&other.scale, t),
            rotation: self.rotation + (other.rotation - self.rotation) * t,
            anchor: self.anchor.lerp(&other.anchor, t),
            opacity: self.opacity + (other.opacity - self.opacity) * t,
        }
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_lerp() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(10.0, 20.0);
        let mid = a.lerp(&b, 0.5);
        assert!((mid.x - 5.0).abs() < 0.001);
        assert!((mid.y - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_point_on_circle() {
        let c = Point2D::zero();
        let p = c.on_circle(2.0, 0.0);
        assert!((p.x - 2.0).abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
        let q = c.on_circle(2.0, std::f64::consts::FRAC_PI_2);
        assert!(q.x.abs() < 1e-9);
        assert!((q.y - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_point_arithmetic() {
        let p = Point2D::new(1.0, 2.0) + Point2D::new(3.0, -1.0);
        assert_eq!(p, Point2D::new(4.0, 1.0));
        let d = Point2D::new(4.0, 1.0) - Point2D::new(1.0, 1.0);
        assert_eq!(d, Point2D::new(3.0, 0.0));
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(Point2D::new(1.0, 1.0), Size2D::new(4.0, 2.0));
        assert!((r.left() - -1.0).abs() < 1e-9);
        assert!((r.right() - 3.0).abs() < 1e-9);
        assert!((r.top() - 2.0).abs() < 1e-9);
        assert!((r.bottom() - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_size_aspect_ratio() {
        let s = Size2D::new(1920.0, 1080.0);
        assert!((s.aspect_ratio() - 16.0 / 9.0).abs() < 0.01);
    }

    #[test]
    fn test_transform_identity() {
        let t = Transform2D::identity();
        assert_eq!(t.position, Point2D::zero());
        assert_eq!(t.scale, Point2D::new(1.0, 1.0));
        assert_eq!(t.rotation, 0.0);
        assert_eq!(t.opacity, 1.0);
    }

    #[test]
    fn test_transform_lerp() {
        let a = Transform2D::identity();
        let mut b = Transform2D::identity();
        b.position = Point2D::new(100.0, 200.0);
        b.opacity = 0.0;
        let mid = a.lerp(&b, 0.5);
        assert!((mid.position.x - 50.0).abs() < 0.001);
        assert!((mid.opacity - 0.5).abs() < 0.001);
    }
}
