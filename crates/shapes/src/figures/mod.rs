//! Planar figures and their perimeter/area.
//!
//! Purpose
//! - One capability set `Shape` {perimeter, area} over three value types.
//! - Plain floating-point arithmetic: degenerate or negative inputs flow
//!   through IEEE semantics (negative results, NaN) instead of erroring.
//!
//! Layout
//! - `types`: `Circle`, `Triangle`, `Rectangle`, `Figure` and constructors.
//! - `measure`: the `Shape` trait and its implementations.
//! - `check`: opt-in validation (`Validate`, `ShapeCfg`, `ShapeError`).
//! - `rand`: reproducible random figures for tests and benches.

mod check;
mod measure;
pub mod rand;
mod types;

pub use check::{ShapeCfg, ShapeError, Validate};
pub use measure::{Measurement, Shape};
pub use types::{Circle, Figure, Rectangle, Triangle};
