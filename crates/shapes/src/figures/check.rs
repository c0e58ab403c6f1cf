//! Opt-in validation for figure inputs.
//!
//! Measurement itself stays unchecked; callers that need geometrically
//! meaningful values call `validate` or build through `try_new`.
//! Zero lengths are valid (degenerate but well-defined).

use std::fmt;

use super::types::{Circle, Figure, Rectangle, Triangle};

/// Validation tolerances.
#[derive(Clone, Copy, Debug)]
pub struct ShapeCfg {
    /// Slack for the triangle inequality: accept `c <= a + b + eps_len`.
    /// Heron's radicand must still be non-negative.
    pub eps_len: f64,
}

impl Default for ShapeCfg {
    fn default() -> Self {
        Self { eps_len: 1e-12 }
    }
}

/// Reasons a figure is rejected by `Validate`.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// A length is NaN or infinite.
    NonFinite { field: &'static str, value: f64 },
    /// A length is below zero.
    NegativeLength { field: &'static str, value: f64 },
    /// One side exceeds the sum of the other two.
    TriangleInequality { a: f64, b: f64, c: f64 },
    /// Sides pass the (eps-relaxed) inequality but Heron's radicand rounds below zero.
    NegativeRadicand { a: f64, b: f64, c: f64, radicand: f64 },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::NonFinite { field, value } => {
                write!(f, "{field} must be finite, got {value}")
            }
            ShapeError::NegativeLength { field, value } => {
                write!(f, "{field} must be non-negative, got {value}")
            }
            ShapeError::TriangleInequality { a, b, c } => write!(
                f,
                "sides ({a}, {b}, {c}) violate the triangle inequality"
            ),
            ShapeError::NegativeRadicand { a, b, c, radicand } => write!(
                f,
                "sides ({a}, {b}, {c}) give a negative Heron radicand {radicand}"
            ),
        }
    }
}

impl std::error::Error for ShapeError {}

/// Geometric validity check.
pub trait Validate {
    fn validate(&self, cfg: &ShapeCfg) -> Result<(), ShapeError>;
}

fn length(field: &'static str, value: f64) -> Result<(), ShapeError> {
    if !value.is_finite() {
        return Err(ShapeError::NonFinite { field, value });
    }
    if value < 0.0 {
        return Err(ShapeError::NegativeLength { field, value });
    }
    Ok(())
}

fn logged<T>(kind: &'static str, res: Result<T, ShapeError>) -> Result<T, ShapeError> {
    if let Err(err) = &res {
        tracing::debug!(kind, error = %err, "rejected figure");
    }
    res
}

impl Validate for Circle {
    fn validate(&self, _cfg: &ShapeCfg) -> Result<(), ShapeError> {
        logged("circle", length("radius", self.radius))
    }
}

impl Validate for Rectangle {
    fn validate(&self, _cfg: &ShapeCfg) -> Result<(), ShapeError> {
        let res = length("width", self.width).and_then(|()| length("height", self.height));
        logged("rectangle", res)
    }
}

fn triangle_sides(t: &Triangle, eps: f64) -> Result<(), ShapeError> {
    length("a", t.a)?;
    length("b", t.b)?;
    length("c", t.c)?;
    let [a, b, c] = t.sides();
    if a > b + c + eps || b > a + c + eps || c > a + b + eps {
        return Err(ShapeError::TriangleInequality { a, b, c });
    }
    let radicand = t.heron_radicand();
    if radicand < 0.0 {
        return Err(ShapeError::NegativeRadicand { a, b, c, radicand });
    }
    Ok(())
}

impl Validate for Triangle {
    fn validate(&self, cfg: &ShapeCfg) -> Result<(), ShapeError> {
        logged("triangle", triangle_sides(self, cfg.eps_len))
    }
}

impl Validate for Figure {
    fn validate(&self, cfg: &ShapeCfg) -> Result<(), ShapeError> {
        match self {
            Figure::Circle(c) => c.validate(cfg),
            Figure::Triangle(t) => t.validate(cfg),
            Figure::Rectangle(r) => r.validate(cfg),
        }
    }
}

impl Circle {
    /// Checked constructor using `ShapeCfg::default()`.
    pub fn try_new(radius: f64) -> Result<Self, ShapeError> {
        let c = Self::new(radius);
        c.validate(&ShapeCfg::default())?;
        Ok(c)
    }
}

impl Triangle {
    /// Checked constructor using `ShapeCfg::default()`. Accepted triangles have a non-NaN area.
    pub fn try_new(a: f64, b: f64, c: f64) -> Result<Self, ShapeError> {
        let t = Self::new(a, b, c);
        t.validate(&ShapeCfg::default())?;
        Ok(t)
    }
}

impl Rectangle {
    /// Checked constructor using `ShapeCfg::default()`.
    pub fn try_new(width: f64, height: f64) -> Result<Self, ShapeError> {
        let r = Self::new(width, height);
        r.validate(&ShapeCfg::default())?;
        Ok(r)
    }
}
