use super::grid::{GRID_SIZE, PatternGrid};
use crate::error::ValidationError;
use serde::Deserialize;
use std::fmt::Write;

pub const DEFAULT_SIZE: f64 = 160.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatternStyle {
    pub size: f64,
    pub background_color: String,
    pub foreground_color: String,
}

impl Default for PatternStyle {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            background_color: "#FFFFFF".to_string(),
            foreground_color: "#000000".to_string(),
        }
    }
}

impl PatternStyle {
    pub fn with_size(size: f64) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut err = ValidationError::new();
        if !self.size.is_finite() || self.size <= 0.0 {
            err.push("size", "must be a positive number");
        }
        if self.background_color.trim().is_empty() {
            err.push("backgroundColor", "must not be empty");
        }
        if self.foreground_color.trim().is_empty() {
            err.push("foregroundColor", "must not be empty");
        }
        err.into_result()
    }

    pub fn cell_size(&self) -> f64 {
        self.size / GRID_SIZE as f64
    }

    /// Rendered edge length including the two-cell padding on each side.
    pub fn dimension(&self) -> f64 {
        self.size + 4.0 * self.cell_size()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPattern {
    pub dimension: f64,
    pub cell_size: f64,
    pub svg: String,
}

pub fn render_svg(grid: &PatternGrid, style: &PatternStyle) -> RenderedPattern {
    let cell = style.cell_size();
    let padding = 2.0 * cell;
    let dimension = style.dimension();
    let background = escape_attr(&style.background_color);
    let foreground = escape_attr(&style.foreground_color);

    let mut svg = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{0}\" height=\"{0}\" viewBox=\"0 0 {0} {0}\">",
        dimension
    );
    let _ = writeln!(
        svg,
        "\t<rect x=\"0\" y=\"0\" width=\"{0}\" height=\"{0}\" rx=\"{1}\" ry=\"{1}\" fill=\"{2}\"/>",
        dimension, cell, background
    );
    for (x, y) in grid.filled_cells() {
        let _ = writeln!(
            svg,
            "\t<rect x=\"{}\" y=\"{}\" width=\"{2}\" height=\"{2}\" fill=\"{3}\"/>",
            padding + x as f64 * cell,
            padding + y as f64 * cell,
            cell,
            foreground
        );
    }
    svg.push_str("</svg>\n");

    RenderedPattern {
        dimension,
        cell_size: cell,
        svg,
    }
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
