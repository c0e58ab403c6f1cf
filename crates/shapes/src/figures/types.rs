//! Value types for the supported figures.
//!
//! All types are immutable `Copy` values; constructors here never validate.
//! See `check` for the fallible `try_new` variants.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Circle of the given radius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

/// Triangle given by its three side lengths.
///
/// Invariants:
/// - None enforced. Sides violating the triangle inequality give a NaN area.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Triangle {
    #[inline]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Triangle with vertices `p, q, r`; side `a` is opposite `p`, etc.
    pub fn from_vertices(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>) -> Self {
        Self {
            a: (q - r).norm(),
            b: (r - p).norm(),
            c: (p - q).norm(),
        }
    }

    /// Half the perimeter (Heron's `p`).
    #[inline]
    pub fn semi_perimeter(&self) -> f64 {
        (self.a + self.b + self.c) / 2.0
    }

    /// `p(p-a)(p-b)(p-c)` with `p` the semi-perimeter; negative for impossible sides.
    #[inline]
    pub fn heron_radicand(&self) -> f64 {
        let p = self.semi_perimeter();
        p * (p - self.a) * (p - self.b) * (p - self.c)
    }

    #[inline]
    pub fn sides(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }
}

/// Rectangle given by width and height. A square has `width == height`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }

    /// Axis-aligned box spanned by two opposite corners.
    pub fn from_corners(p: Vector2<f64>, q: Vector2<f64>) -> Self {
        let d = q - p;
        Self::new(d.x.abs(), d.y.abs())
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// Closed sum over the supported figures.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Figure {
    Circle(Circle),
    Triangle(Triangle),
    Rectangle(Rectangle),
}

impl Figure {
    pub fn kind(&self) -> &'static str {
        match self {
            Figure::Circle(_) => "circle",
            Figure::Triangle(_) => "triangle",
            Figure::Rectangle(_) => "rectangle",
        }
    }
}

impl From<Circle> for Figure {
    fn from(c: Circle) -> Self {
        Figure::Circle(c)
    }
}

impl From<Triangle> for Figure {
    fn from(t: Triangle) -> Self {
        Figure::Triangle(t)
    }
}

impl From<Rectangle> for Figure {
    fn from(r: Rectangle) -> Self {
        Figure::Rectangle(r)
    }
}
