use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::types::{Circle, Figure, Rectangle, Triangle};

/// Perimeter and area of one figure.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub perimeter: f64,
    pub area: f64,
}

/// Closed 2D figure with a perimeter and an area.
///
/// Pre: none. Post: plain f64 arithmetic on the stored lengths; pure and
/// deterministic, so repeated calls return identical values.
pub trait Shape {
    fn perimeter(&self) -> f64;
    fn area(&self) -> f64;

    fn measure(&self) -> Measurement {
        Measurement {
            perimeter: self.perimeter(),
            area: self.area(),
        }
    }
}

impl Shape for Circle {
    #[inline]
    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
    #[inline]
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

impl Shape for Triangle {
    #[inline]
    fn perimeter(&self) -> f64 {
        self.a + self.b + self.c
    }
    /// Heron's formula. NaN if the sides violate the triangle inequality.
    fn area(&self) -> f64 {
        self.heron_radicand().sqrt()
    }
}

impl Shape for Rectangle {
    #[inline]
    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
    #[inline]
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

impl Shape for Figure {
    fn perimeter(&self) -> f64 {
        match self {
            Figure::Circle(c) => c.perimeter(),
            Figure::Triangle(t) => t.perimeter(),
            Figure::Rectangle(r) => r.perimeter(),
        }
    }
    fn area(&self) -> f64 {
        match self {
            Figure::Circle(c) => c.area(),
            Figure::Triangle(t) => t.area(),
            Figure::Rectangle(r) => r.area(),
        }
    }
}
