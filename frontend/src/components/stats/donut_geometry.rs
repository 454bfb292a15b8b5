//! Pixel geometry for the category donut. Segments start at 12 o'clock and
//! run clockwise; fractions are of a full turn.

use std::f64::consts::TAU;

/// Inner radius as a fraction of the outer one
const HOLE_RATIO: f64 = 0.45;
/// Share of the half-size used by the ring; the rest is room for labels
const RING_RATIO: f64 = 0.62;
const LABEL_OFFSET: f64 = 18.0;
const LABEL_RUN: f64 = 14.0;
/// Arc resolution for a full turn
const FULL_TURN_STEPS: f64 = 144.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSide {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlacement {
    /// Callout line: ring edge, elbow, end of the horizontal run
    pub callout: [(i32, i32); 3],
    pub text_at: (i32, i32),
    pub side: LabelSide,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutLayout {
    pub center: (f64, f64),
    pub outer_radius: f64,
    pub inner_radius: f64,
}

impl DonutLayout {
    pub fn fit(width: u32, height: u32) -> Self {
        let half = f64::from(width.min(height)) / 2.0;
        let outer_radius = half * RING_RATIO;
        Self {
            center: (f64::from(width) / 2.0, f64::from(height) / 2.0),
            outer_radius,
            inner_radius: outer_radius * HOLE_RATIO,
        }
    }

    /// Point on the circle of `radius` at `fraction` of a clockwise turn from the top
    pub fn point_at(&self, fraction: f64, radius: f64) -> (f64, f64) {
        let angle = fraction * TAU;
        (
            self.center.0 + radius * angle.sin(),
            self.center.1 - radius * angle.cos(),
        )
    }

    /// Closed outline of one ring segment: outer arc forward, inner arc back
    pub fn ring_segment(&self, start: f64, share: f64) -> Vec<(i32, i32)> {
        let steps = ((share * FULL_TURN_STEPS).ceil() as usize).max(1);
        let fraction = |i: usize| start + share * (i as f64 / steps as f64);

        let outer = (0..=steps).map(|i| self.point_at(fraction(i), self.outer_radius));
        let inner = (0..=steps)
            .rev()
            .map(|i| self.point_at(fraction(i), self.inner_radius));

        outer.chain(inner).map(to_pixel).collect()
    }

    pub fn label_placement(&self, start: f64, share: f64) -> LabelPlacement {
        let middle = start + share / 2.0;
        let side = if middle.rem_euclid(1.0) < 0.5 {
            LabelSide::Right
        } else {
            LabelSide::Left
        };

        let edge = self.point_at(middle, self.outer_radius);
        let elbow = self.point_at(middle, self.outer_radius + LABEL_OFFSET);
        let run = match side {
            LabelSide::Right => LABEL_RUN,
            LabelSide::Left => -LABEL_RUN,
        };
        let end = (elbow.0 + run, elbow.1);
        let text_at = (end.0 + run / 3.0, end.1);

        LabelPlacement {
            callout: [to_pixel(edge), to_pixel(elbow), to_pixel(end)],
            text_at: to_pixel(text_at),
            side,
        }
    }
}

/// Start fraction of each segment, given the segments' shares in draw order
pub fn segment_starts(shares: &[f64]) -> Vec<f64> {
    shares
        .iter()
        .scan(0.0, |cursor, share| {
            let start = *cursor;
            *cursor += share;
            Some(start)
        })
        .collect()
}

fn to_pixel(point: (f64, f64)) -> (i32, i32) {
    (point.0.round() as i32, point.1.round() as i32)
}
