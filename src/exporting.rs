use crate::feature::Couple;
use crate::feature::Feature;
use crate::feature::Float;
use crate::feature::Segment;

use core::fmt;
use alloc::{format, string::String, vec::Vec};

pub const SVG_HEADER: &str = "<svg xmlns='http://www.w3.org/2000/svg'>";
pub const SVG_FOOTER: &str = "</svg>";

/// One stroked SVG element; features become a sequence of these.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SvgElement {
    Line {
        from: Couple,
        to: Couple,
    },
    Quadratic {
        start: Couple,
        ctrl: Couple,
        end: Couple,
    },
    Cubic {
        start: Couple,
        ctrl0: Couple,
        ctrl1: Couple,
        end: Couple,
    },
    Arc {
        start: Couple,
        radius: Float,
        large_arc: bool,
        sweep: bool,
        end: Couple,
    },
}

fn path(f: &mut fmt::Formatter<'_>, d: fmt::Arguments<'_>) -> fmt::Result {
    write!(f, "<path d='{}' fill='none' stroke='black' />", d)
}

impl fmt::Display for SvgElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SvgElement::Line { from, to } => write!(
                f,
                "<line x1='{}' y1='{}' x2='{}' y2='{}' stroke='black' />",
                from.x, from.y, to.x, to.y,
            ),
            SvgElement::Quadratic { start, ctrl, end } => path(f, format_args!(
                "M{},{} Q{},{} {},{}",
                start.x, start.y, ctrl.x, ctrl.y, end.x, end.y,
            )),
            SvgElement::Cubic { start, ctrl0, ctrl1, end } => path(f, format_args!(
                "M{},{} C{},{} {},{} {},{}",
                start.x, start.y, ctrl0.x, ctrl0.y, ctrl1.x, ctrl1.y, end.x, end.y,
            )),
            SvgElement::Arc { start, radius, large_arc, sweep, end } => path(f, format_args!(
                "M{},{} A{},{} 0 {} {} {},{}",
                start.x, start.y, radius, radius, large_arc as u8, sweep as u8, end.x, end.y,
            )),
        }
    }
}

/// Elements of one feature, closing edge included.
///
/// Spline segments with more than 3 listed points only draw a cubic through
/// the first 3 of them, yet the current point still moves to the last one.
pub fn feature_elements(feature: &Feature) -> Vec<SvgElement> {
    let mut elements = Vec::with_capacity(feature.segments.len() + 1);
    let mut current = feature.start;

    for segment in &feature.segments {
        match segment {
            Segment::LineTo(p) => {
                elements.push(SvgElement::Line { from: current, to: *p });
                current = *p;
            }
            Segment::Spline(points) => {
                match points.as_slice() {
                    [ctrl, end] => elements.push(SvgElement::Quadratic {
                        start: current,
                        ctrl: *ctrl,
                        end: *end,
                    }),
                    [ctrl0, ctrl1, end, ..] => elements.push(SvgElement::Cubic {
                        start: current,
                        ctrl0: *ctrl0,
                        ctrl1: *ctrl1,
                        end: *end,
                    }),
                    _ => (),
                }
                if let Some(last) = points.last() {
                    current = *last;
                }
            }
            Segment::Arc(arc) => {
                let end = arc.end_point();
                elements.push(SvgElement::Arc {
                    start: arc.start_point(),
                    radius: arc.radius,
                    large_arc: arc.is_large(),
                    sweep: arc.is_sweep(),
                    end,
                });
                current = end;
            }
        }
    }

    elements.push(SvgElement::Line { from: current, to: feature.start });
    elements
}

pub fn svg_elements(features: &[Feature]) -> Vec<SvgElement> {
    features.iter().flat_map(feature_elements).collect()
}

/// Complete SVG document, one element per line.
pub fn to_svg(features: &[Feature]) -> String {
    let elements = svg_elements(features);
    log::debug!("exporting {} feature(s) as {} svg element(s)", features.len(), elements.len());

    let body: String = elements.iter().map(|element| format!("\n{}", element)).collect();
    format!("{}{}\n{}", SVG_HEADER, body, SVG_FOOTER)
}
