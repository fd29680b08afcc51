//! Decorative share-code pattern.
//!
//! A deterministic 21×21 grid derived from a string, rendered as SVG. It looks
//! like a QR code but encodes nothing and is not scannable.

mod grid;
mod render;

pub use grid::{GRID_SIZE, MARKER_SIZE, PatternGrid, PatternMemo};
pub use render::{DEFAULT_SIZE, PatternStyle, RenderedPattern, render_svg};
