use crate::feature::Arc;
use crate::feature::Couple;
use crate::feature::Feature;
use crate::feature::Float;
use crate::feature::Segment;

use rgb::{ComponentBytes, RGB8};

#[allow(unused_imports)]
use vek::num_traits::real::Real;

use alloc::{vec, vec::Vec};

pub const BACKGROUND: RGB8 = RGB8 { r: 255, g: 255, b: 255 };
pub const STROKE: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Angular distance between two arc samples, in degrees
pub const ARC_STEP: Float = 1.0;
/// One full turn; samples past it land on already visited points
const MAX_ARC_SAMPLES: usize = 361;

pub const MIN_SPLINE_STEPS: usize = 20;
pub const MAX_SPLINE_STEPS: usize = 1 << 16;

/// Fixed-size RGB pixel buffer, row-major with the origin at the top left.
///
/// Every drawing primitive writes single pixels; anything outside of the
/// buffer is silently dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<RGB8>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![BACKGROUND; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[RGB8] {
        &self.pixels
    }

    /// `width * height * 3` bytes, in R, G, B order
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_bytes()
    }

    pub fn into_pixels(self) -> Vec<RGB8> {
        self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<RGB8> {
        match x < self.width && y < self.height {
            true => Some(self.pixels[y * self.width + x]),
            false => None,
        }
    }

    pub fn clear(&mut self, color: RGB8) {
        self.pixels.fill(color);
    }

    pub fn set_pixel(&mut self, x: i64, y: i64, color: RGB8) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    /// Rounds `point` to the nearest pixel (halves away from zero) and writes it.
    pub fn plot(&mut self, point: Couple, color: RGB8) {
        let (x, y) = round(point);
        self.set_pixel(x, y, color);
    }

    /// Bresenham; endpoints are rounded once, before stepping.
    ///
    /// Only the stretch of the major axis that crosses the canvas is
    /// stepped: the cursor jumps to where the line enters and stops where
    /// it leaves, writing the same pixels as a full walk would.
    pub fn draw_line(&mut self, from: Couple, to: Couple, color: RGB8) {
        let (x1, y1) = clamped(from);
        let (x2, y2) = clamped(to);

        let dx = (x2 - x1).abs();
        let dy = -(y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };

        let x_major = dx >= -dy;
        let window = match x_major {
            true => visible(x1, sx, dx, self.width),
            false => visible(y1, sy, -dy, self.height),
        };
        let Some((first, last)) = window else {
            return;
        };

        // the error term only depends on how far each axis has stepped
        let (nx, ny) = match x_major {
            true => (first, minor_steps(first, -dy, dx)),
            false => (minor_steps(first, dx, -dy), first),
        };
        let mut x = x1 + sx * nx;
        let mut y = y1 + sy * ny;
        let mut err = dx + dy + nx * dy + ny * dx;

        for _ in first..last {
            self.set_pixel(x as i64, y as i64, color);
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
        self.set_pixel(x as i64, y as i64, color);
    }

    /// Point-samples the arc every [`ARC_STEP`] degrees, from `start_angle`
    /// towards `end_angle`, both included.
    ///
    /// Large radii leave gaps between samples.
    pub fn draw_arc(&mut self, arc: &Arc, color: RGB8) {
        for angle in arc_angles(arc) {
            self.plot(arc.point_at(angle), color);
        }
    }

    /// Bezier curve of any degree through de Casteljau evaluation.
    ///
    /// `points` includes the current point; fewer than 3 draws nothing.
    pub fn draw_spline(&mut self, points: &[Couple], color: RGB8) {
        if points.len() < 3 {
            return;
        }

        let steps = spline_steps(points);
        let mut work = Vec::with_capacity(points.len());
        for i in 0..=steps {
            let t = (i as Float) / (steps as Float);
            work.clear();
            work.extend_from_slice(points);
            self.plot(de_casteljau(&mut work, t), color);
        }
    }

    /// Strokes every feature with [`STROKE`], closing each outline.
    pub fn draw_features(&mut self, features: &[Feature]) -> &[RGB8] {
        log::debug!("rasterizing {} feature(s) on {}x{}", features.len(), self.width, self.height);

        for feature in features {
            let start = feature.start;
            let mut current = start;
            let mut spline = Vec::new();

            for segment in &feature.segments {
                match segment {
                    Segment::LineTo(p) => {
                        self.draw_line(current, *p, STROKE);
                        current = *p;
                    }
                    Segment::Spline(points) => {
                        spline.clear();
                        spline.push(current);
                        spline.extend_from_slice(points);
                        self.draw_spline(&spline, STROKE);
                        if let Some(last) = points.last() {
                            current = *last;
                        }
                    }
                    Segment::Arc(arc) => {
                        self.draw_arc(arc, STROKE);
                        // not necessarily where the last sample landed
                        current = arc.end_point();
                    }
                }
            }

            self.draw_line(current, start, STROKE);
        }

        &self.pixels
    }
}

fn round(point: Couple) -> (i64, i64) {
    (point.x.round() as i64, point.y.round() as i64)
}

/// Keeps line arithmetic far from `i128` overflow
const LINE_LIMIT: i64 = 1 << 60;

fn clamped(point: Couple) -> (i128, i128) {
    let (x, y) = round(point);
    let clamp = |v: i64| v.clamp(-LINE_LIMIT, LINE_LIMIT) as i128;
    (clamp(x), clamp(y))
}

/// Range of steps `n` in `0..=len` for which `start + step * n` lies in `0..size`.
fn visible(start: i128, step: i128, len: i128, size: usize) -> Option<(i128, i128)> {
    let size = size as i128;
    let (first, last) = match step > 0 {
        true => ((-start).max(0), (size - 1 - start).min(len)),
        false => ((start - (size - 1)).max(0), start.min(len)),
    };
    match first <= last {
        true => Some((first, last)),
        false => None,
    }
}

/// Minor axis steps taken once the major axis has stepped `n` times.
fn minor_steps(n: i128, minor: i128, major: i128) -> i128 {
    match major {
        0 => 0,
        _ => (2 * n * minor + major) / (2 * major),
    }
}

/// Sampled angles of `arc`, in degrees.
pub fn arc_angles(arc: &Arc) -> impl Iterator<Item = Float> {
    let (start, end) = (arc.start_angle, arc.end_angle);
    let step = match end >= start {
        true => ARC_STEP,
        false => -ARC_STEP,
    };
    let span = ((end - start) / ARC_STEP).abs().floor();
    let samples = match span < (MAX_ARC_SAMPLES as Float) {
        true => span as usize + 1,
        false => MAX_ARC_SAMPLES,
    };
    (0..samples).map(move |i| start + (i as Float) * step)
}

/// Sample count tied to the length of the control polygon.
fn spline_steps(points: &[Couple]) -> usize {
    let chord: Float = points.windows(2).map(|w| (w[1] - w[0]).magnitude()).sum();
    let chord = chord.round();
    match chord < (MAX_SPLINE_STEPS as Float) {
        true => (chord as usize).max(MIN_SPLINE_STEPS),
        false => MAX_SPLINE_STEPS,
    }
}

/// Reduces `work` in place until its first element is the point at `t`.
fn de_casteljau(work: &mut [Couple], t: Float) -> Couple {
    let n = work.len() - 1;
    for r in 1..=n {
        for i in 0..=(n - r) {
            work[i] = work[i] * (1.0 - t) + work[i + 1] * t;
        }
    }
    work[0]
}
