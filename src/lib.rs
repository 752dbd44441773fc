#![no_std]
extern crate alloc;

pub mod feature;
pub mod parsing;
pub mod serializing;
pub mod rendering;
pub mod exporting;


#[doc(inline)]
pub use {
    feature::Arc,
    feature::Couple,
    feature::Feature,
    feature::Segment,
    parsing::parse,
    parsing::ParseError,
    parsing::ParseErrorKind,
    serializing::serialize,
    rendering::Canvas,
    exporting::to_svg,
};
