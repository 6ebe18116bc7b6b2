//! Scene bounds — the rectangle the renderer draws and vehicles live in.

use crate::geom::Vec2;

/// Width and height of the simulated scene, origin at the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneBounds {
    pub width:  f64,
    pub height: f64,
}

impl SceneBounds {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Geometric center of the scene — the intersection sits here.
    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// `true` when `p` lies inside the scene rectangle (edges inclusive).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }

    /// `true` once `p` has moved more than `margin` beyond any scene edge.
    #[inline]
    pub fn beyond_margin(self, p: Vec2, margin: f64) -> bool {
        p.x < -margin || p.x > self.width + margin || p.y < -margin || p.y > self.height + margin
    }
}

impl Default for SceneBounds {
    fn default() -> Self {
        Self { width: 800.0, height: 800.0 }
    }
}
