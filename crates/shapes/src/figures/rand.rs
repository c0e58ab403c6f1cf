//! Random figures (uniform variant + uniform lengths, with replay tokens).
//!
//! Purpose
//! - Deterministic inputs for property tests and benches. A `(seed, index)`
//!   token always regenerates the same figure.
//!
//! Model
//! - Variant drawn uniformly from {circle, triangle, rectangle}.
//! - Radius, width, height and the two given triangle sides drawn
//!   uniformly from `[0, max_len)`.
//! - Triangles are built from two sides and an included angle in `[0, π)`,
//!   so every sampled triangle satisfies the triangle inequality.

use std::f64::consts::PI;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Circle, Figure, Rectangle, Triangle};

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct FigureCfg {
    /// Upper bound (exclusive) for drawn lengths. Clamped to >= 1e-9; non-finite means 1.0.
    pub max_len: f64,
}

impl Default for FigureCfg {
    fn default() -> Self {
        Self { max_len: 10.0 }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn advance(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Draw one figure for `tok`.
pub fn draw_figure(cfg: FigureCfg, tok: ReplayToken) -> Figure {
    let mut rng = tok.to_std_rng();
    let max_len = if cfg.max_len.is_finite() {
        cfg.max_len.max(1e-9)
    } else {
        1.0
    };
    match rng.gen_range(0..3u8) {
        0 => Circle::new(rng.gen_range(0.0..max_len)).into(),
        1 => {
            let b = rng.gen_range(0.0..max_len);
            let c = rng.gen_range(0.0..max_len);
            let theta = rng.gen_range(0.0..PI);
            let p = Vector2::zeros();
            let q = Vector2::new(c, 0.0);
            let r = Vector2::new(b * theta.cos(), b * theta.sin());
            Triangle::from_vertices(p, q, r).into()
        }
        _ => Rectangle::new(rng.gen_range(0.0..max_len), rng.gen_range(0.0..max_len)).into(),
    }
}

/// Draw `n` figures from consecutive indices starting at `tok`.
pub fn draw_figures(cfg: FigureCfg, tok: ReplayToken, n: usize) -> Vec<Figure> {
    std::iter::successors(Some(tok), |t| Some(t.advance()))
        .take(n)
        .map(|t| draw_figure(cfg, t))
        .collect()
}
