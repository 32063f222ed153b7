//! SVG drawing surface
//!
//! Every draw call becomes one SVG node appended in call order, so the
//! document order is the paint order.

use facet_svg::facet_xml::SerializeOptions;
use facet_svg::{Path, PathData, Svg, SvgNode, SvgStyle, Text, facet_xml};
use glam::DVec2;

use super::surface::{DrawingSurface, Font, Pen};
use super::{Tile, TileParams};
use crate::errors::{RenderError, Result};
use crate::feature::MapFeatureData;
use crate::types::Color;

/// A drawing surface that builds an SVG document
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    children: Vec<SvgNode>,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            children: Vec::new(),
        }
    }

    /// Number of nodes drawn so far
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Serialize the document
    pub fn finish(self) -> Result<String> {
        crate::log::debug!(nodes = self.children.len(), "finishing svg");
        let svg = Svg {
            width: Some(fmt_num(self.width)),
            height: Some(fmt_num(self.height)),
            view_box: Some(format!("0 0 {} {}", fmt_num(self.width), fmt_num(self.height))),
            children: self.children,
        };

        fn format_float(value: f64, writer: &mut dyn std::io::Write) -> std::io::Result<()> {
            write!(writer, "{}", fmt_num(value))
        }

        let options = SerializeOptions {
            float_formatter: Some(format_float),
            ..Default::default()
        };
        facet_xml::to_string_with_options(&svg, &options).map_err(|e| RenderError::Serialize {
            message: e.to_string(),
        })
    }
}

fn polyline_data(points: &[DVec2]) -> PathData {
    let mut data = PathData::new();
    for (i, p) in points.iter().enumerate() {
        data = if i == 0 { data.m(p.x, p.y) } else { data.l(p.x, p.y) };
    }
    data
}

fn dash_array(pen: &Pen) -> Option<String> {
    let dash = pen.dash?;
    let lengths: Vec<String> = dash.iter().map(|d| fmt_num(d * pen.width)).collect();
    Some(lengths.join(","))
}

impl DrawingSurface for SvgSurface {
    fn stroke_polyline(&mut self, points: &[DVec2], pen: &Pen) {
        let mut style = SvgStyle::new()
            .add("fill", "none")
            .add("stroke", &pen.color.to_rgb_string())
            .add("stroke-width", &fmt_num(pen.width));
        if let Some(dash) = dash_array(pen) {
            style = style.add("stroke-dasharray", &dash);
        }
        self.children.push(SvgNode::Path(Path {
            d: Some(polyline_data(points)),
            fill: None,
            stroke: None,
            stroke_width: None,
            stroke_dasharray: None,
            style,
        }));
    }

    fn fill_polygon(&mut self, points: &[DVec2], color: Color) {
        let style = SvgStyle::new()
            .add("fill", &color.to_rgb_string())
            .add("stroke", "none");
        self.children.push(SvgNode::Path(Path {
            d: Some(polyline_data(points).z()),
            fill: None,
            stroke: None,
            stroke_width: None,
            stroke_dasharray: None,
            style,
        }));
    }

    fn draw_text(&mut self, text: &str, position: DVec2, font: &Font, color: Color) {
        self.children.push(SvgNode::Text(Text {
            x: Some(position.x),
            y: Some(position.y),
            transform: None,
            fill: Some(color.to_rgb_string()),
            stroke: None,
            stroke_width: None,
            style: String::new(),
            font_family: font.family.map(str::to_string),
            font_style: None,
            font_weight: font.bold.then(|| "bold".to_string()),
            font_size: Some(fmt_num(font.size)),
            text_anchor: Some("start".to_string()),
            dominant_baseline: Some("auto".to_string()),
            content: text.to_string(),
        }));
    }
}

/// Render one tile's features into an SVG document
pub fn render_svg(features: &[MapFeatureData], params: &TileParams) -> Result<String> {
    let mut surface = SvgSurface::new(params.width, params.height);
    Tile::from_features(features).place(params).render(&mut surface);
    surface.finish()
}

/// Format a number with up to 6 significant figures, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (5 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", value, prec = decimals);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
