// File: crates/streamline-core/src/assemble.rs
// Summary: Flattens accepted streamlines into one x/y sequence and adds a chevron arrowhead per path.

use crate::integrator::StreamlinePath;
use crate::trace::{LineStyle, LineTrace};

/// Default half-opening of the arrowhead chevron (radians).
pub const DEFAULT_ARROW_ANGLE: f64 = std::f64::consts::PI / 9.0;

/// Chevron drawn as `left -> tip -> right`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arrowhead {
    pub left: (f64, f64),
    pub tip: (f64, f64),
    pub right: (f64, f64),
}

/// Chevron for a path, anchored a third of the way along it.
///
/// With `n` points the tip is point `(n + 1) / 3` and the direction comes
/// from the point before it. The wings have length `scale` and open at
/// `±angle` from the path direction. Returns `None` for paths with fewer
/// than 2 points. A zero-length anchor segment yields NaN coordinates.
pub fn arrowhead(points: &[(f64, f64)], scale: f64, angle: f64) -> Option<Arrowhead> {
    if points.len() < 2 {
        return None;
    }
    let tip_idx = (points.len() + 1) / 3;
    let tip = points[tip_idx];
    let tail = points[tip_idx - 1];
    let dx = tip.0 - tail.0;
    let dy = tip.1 - tail.1;

    // atan folds the direction into (-pi/2, pi/2]; the sign of dx restores it.
    let theta = (dy / dx).atan();
    let (a1, a2) = (theta + angle, theta - angle);
    let w1 = (a1.cos() * scale, a1.sin() * scale);
    let w2 = (a2.cos() * scale, a2.sin() * scale);

    let (left, right) = if dx >= 0.0 {
        ((tip.0 - w1.0, tip.1 - w1.1), (tip.0 - w2.0, tip.1 - w2.1))
    } else {
        ((tip.0 + w1.0, tip.1 + w1.1), (tip.0 + w2.0, tip.1 + w2.1))
    };
    Some(Arrowhead { left, tip, right })
}

/// Accumulates paths in the order they are pushed. Each path is followed by
/// a break, then its arrowhead, then another break.
pub struct PathAssembler {
    arrow_scale: f64,
    angle: f64,
    x: Vec<Option<f64>>,
    y: Vec<Option<f64>>,
    paths: usize,
}

impl PathAssembler {
    pub fn new(arrow_scale: f64, angle: f64) -> Self {
        Self { arrow_scale, angle, x: Vec::new(), y: Vec::new(), paths: 0 }
    }

    pub fn push_path(&mut self, path: &StreamlinePath) {
        for &p in &path.points {
            self.push_point(p);
        }
        self.push_break();
        if let Some(a) = arrowhead(&path.points, self.arrow_scale, self.angle) {
            self.push_point(a.left);
            self.push_point(a.tip);
            self.push_point(a.right);
            self.push_break();
        }
        self.paths += 1;
    }

    /// Paths pushed so far.
    pub fn path_count(&self) -> usize { self.paths }

    pub fn finish(self, style: LineStyle) -> LineTrace {
        LineTrace::new(self.x, self.y, style)
    }

    // Non-finite coordinates cannot be drawn; they become breaks.
    fn push_point(&mut self, (x, y): (f64, f64)) {
        self.x.push(Some(x).filter(|v| v.is_finite()));
        self.y.push(Some(y).filter(|v| v.is_finite()));
    }

    fn push_break(&mut self) {
        self.x.push(None);
        self.y.push(None);
    }
}
