use alloc::vec::Vec;

#[allow(unused_imports)]
use vek::num_traits::real::Real;

pub type Float = f64;
pub type Couple = vek::vec::repr_c::vec2::Vec2<Float>;

/// Circular arc; angles are in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Arc {
    pub center: Couple,
    pub radius: Float,
    pub start_angle: Float,
    pub end_angle: Float,
}

impl Arc {
    pub fn new(cx: Float, cy: Float, radius: Float, start_angle: Float, end_angle: Float) -> Self {
        Self {
            center: Couple::new(cx, cy),
            radius,
            start_angle,
            end_angle,
        }
    }

    /// Point of the circle at `angle` degrees.
    pub fn point_at(&self, angle: Float) -> Couple {
        let (sin, cos) = angle.to_radians().sin_cos();
        Couple::new(self.center.x + self.radius * cos, self.center.y + self.radius * sin)
    }

    pub fn start_point(&self) -> Couple {
        self.point_at(self.start_angle)
    }

    pub fn end_point(&self) -> Couple {
        self.point_at(self.end_angle)
    }

    /// Spans more than half a circle
    pub fn is_large(&self) -> bool {
        (self.end_angle - self.start_angle).abs() > 180.0
    }

    /// Sweeps towards increasing angles
    pub fn is_sweep(&self) -> bool {
        self.end_angle > self.start_angle
    }
}

/// One edge of a feature, starting at the current point.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    LineTo(Couple),
    /// Control points following the current point; the last one is the end.
    Spline(Vec<Couple>),
    Arc(Arc),
}

/// Closed outline: after the last segment, an edge always goes back to `start`.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub start: Couple,
    pub segments: Vec<Segment>,
}

impl Feature {
    pub fn new(start: Couple) -> Self {
        Self {
            start,
            segments: Vec::new(),
        }
    }

    pub fn with_segments(start: Couple, segments: Vec<Segment>) -> Self {
        Self { start, segments }
    }
}
