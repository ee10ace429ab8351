pub mod svg;

pub use svg::SvgStyle;
