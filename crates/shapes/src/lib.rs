//! Perimeter and area of simple closed planar figures.
//!
//! API Policy
//! - `Shape` is the capability set; `Circle`, `Triangle`, `Rectangle` implement it.
//! - `Figure` is the closed sum over the three variants for heterogeneous use.
//! - Measurement never validates. Use `Validate` (or the `try_new` constructors)
//!   when inputs must be geometrically meaningful.

pub mod figures;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use figures::{
    Circle, Figure, Measurement, Rectangle, Shape, ShapeCfg, ShapeError, Triangle, Validate,
};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::figures::rand::{draw_figure, draw_figures, FigureCfg, ReplayToken};
    pub use crate::figures::{
        Circle, Figure, Measurement, Rectangle, Shape, ShapeCfg, ShapeError, Triangle, Validate,
    };
    pub use nalgebra::Vector2 as Vec2;
}
