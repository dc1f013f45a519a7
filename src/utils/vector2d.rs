use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Offset in the launch plane: `x` is horizontal drift, `y` is altitude.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    pub fn zero() -> Self {
        Vector2D::new(0.0, 0.0)
    }

    /// Lifts the offset into world space at the given depth.
    pub fn to_point3(self, z: f64) -> Point3<f64> {
        Point3::new(self.x, self.y, z)
    }

    pub fn to_vector3(self, z: f64) -> Vector3<f64> {
        Vector3::new(self.x, self.y, z)
    }
}

impl From<[f64; 2]> for Vector2D {
    fn from(v: [f64; 2]) -> Self {
        Vector2D::new(v[0], v[1])
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }
}
