use crate::feature::Feature;
use crate::feature::Segment;

use core::fmt;
use alloc::string::{String, ToString};

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::LineTo(p) => write!(f, "LINE {} {}", p.x, p.y),
            Segment::Spline(points) => {
                f.write_str("SPLINE")?;
                for p in points {
                    write!(f, " {} {}", p.x, p.y)?;
                }
                Ok(())
            }
            Segment::Arc(arc) => write!(
                f,
                "ARC {} {} {} {} {}",
                arc.center.x, arc.center.y, arc.radius, arc.start_angle, arc.end_angle,
            ),
        }
    }
}

impl fmt::Display for Feature {
    /// Writes a full `FEATURE` ... `END` block, each line ending with a newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "FEATURE {} {}", self.start.x, self.start.y)?;
        for segment in &self.segments {
            writeln!(f, "{}", segment)?;
        }
        writeln!(f, "END")
    }
}

/// Canonical text for `features`; `parse` of the result gives `features` back.
///
/// Comments, blank lines and the original number formatting of parsed text
/// are not preserved.
pub fn serialize(features: &[Feature]) -> String {
    features.iter().map(ToString::to_string).collect()
}
