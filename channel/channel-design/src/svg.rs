//! SVG plotting of lattice outlines.

use std::fmt::Write;

use channel_lattice::{Lattice, Line, Point};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::boundary::{NamedFace, named_faces};
use crate::error::DesignResult;
use crate::interface::{DesignInterface, validate_extrusion_height};

/// Parameters for SVG export.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SvgExportParams {
    /// Width of the SVG in pixels.
    pub width: u32,
    /// Height of the SVG in pixels.
    pub height: u32,
    /// Padding around the content in pixels.
    pub padding: u32,
    /// Stroke width for walls, in pixels.
    pub stroke_width: f64,
    /// Stroke color for walls (CSS color string).
    pub stroke_color: String,
    /// Stroke color for named boundary faces.
    pub highlight_color: String,
    /// Background color.
    pub background_color: String,
    /// Whether to draw vertices as dots.
    pub show_points: bool,
    /// Whether to draw named faces in the highlight color.
    pub mark_named_faces: bool,
}

impl Default for SvgExportParams {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            padding: 20,
            stroke_width: 1.0,
            stroke_color: "#2d5986".to_string(),
            highlight_color: "#d94a4a".to_string(),
            background_color: "#f5f5f5".to_string(),
            show_points: false,
            mark_named_faces: true,
        }
    }
}

impl SvgExportParams {
    /// Create params with custom colors.
    #[must_use]
    pub fn with_colors(mut self, stroke: &str, highlight: &str) -> Self {
        self.stroke_color = stroke.to_string();
        self.highlight_color = highlight.to_string();
        self
    }

    /// Create params with custom size.
    #[must_use]
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the padding.
    #[must_use]
    pub const fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Toggles vertex dots.
    #[must_use]
    pub const fn with_points(mut self, show_points: bool) -> Self {
        self.show_points = show_points;
        self
    }

    /// Toggles named face highlighting.
    #[must_use]
    pub const fn with_named_faces(mut self, mark_named_faces: bool) -> Self {
        self.mark_named_faces = mark_named_faces;
        self
    }
}

/// Maps lattice coordinates onto the SVG canvas, y pointing down.
#[derive(Debug, Clone, Copy)]
struct Viewport {
    min_x: f64,
    max_y: f64,
    scale: f64,
    margin_x: f64,
    margin_y: f64,
}

impl Viewport {
    /// Fit the extent of `points` into the canvas, centered, keeping aspect.
    fn fit(points: impl IntoIterator<Item = Point>, params: &SvgExportParams) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (mut min_x, mut max_x) = (first.x(), first.x());
        let (mut min_y, mut max_y) = (first.y(), first.y());
        for p in points {
            min_x = min_x.min(p.x());
            max_x = max_x.max(p.x());
            min_y = min_y.min(p.y());
            max_y = max_y.max(p.y());
        }

        let padding = f64::from(params.padding);
        let room_x = (f64::from(params.width) - 2.0 * padding).max(1.0);
        let room_y = (f64::from(params.height) - 2.0 * padding).max(1.0);
        let (span_x, span_y) = (max_x - min_x, max_y - min_y);

        let scale = [(room_x, span_x), (room_y, span_y)]
            .into_iter()
            .filter(|(_, span)| *span > 0.0)
            .map(|(room, span)| room / span)
            .reduce(f64::min)
            .unwrap_or(1.0);

        Some(Self {
            min_x,
            max_y,
            scale,
            margin_x: padding + (room_x - span_x * scale) / 2.0,
            margin_y: padding + (room_y - span_y * scale) / 2.0,
        })
    }

    fn map(&self, p: Point) -> (f64, f64) {
        (
            self.margin_x + (p.x() - self.min_x) * self.scale,
            self.margin_y + (self.max_y - p.y()) * self.scale,
        )
    }
}

/// A design backend that plots what it receives as an SVG drawing.
///
/// # Example
///
/// ```
/// use channel_design::{DesignInterface, SvgExportParams, SvgInterface};
/// use channel_lattice::create_lattice;
///
/// let lattice = create_lattice(&[2, 1, 1], 5.0, 0.5).unwrap();
/// let mut plot = SvgInterface::new(SvgExportParams::default());
/// plot.create_geometry(&lattice, 0.1).unwrap();
/// assert!(plot.render().contains("outlet"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SvgInterface {
    params: SvgExportParams,
    points: Vec<Point>,
    lines: Vec<Line>,
    faces: Vec<NamedFace>,
    extrusion_height: Option<f64>,
}

impl SvgInterface {
    /// Creates an empty plot.
    #[must_use]
    pub fn new(params: SvgExportParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// Export parameters.
    #[must_use]
    pub const fn params(&self) -> &SvgExportParams {
        &self.params
    }

    /// Vertices added so far.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Lines added so far.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Named faces of the last lattice handed to `create_geometry`.
    #[must_use]
    pub fn named_faces(&self) -> &[NamedFace] {
        &self.faces
    }

    /// Render everything added so far.
    ///
    /// Walls come first, named faces over them, then vertex dots. A `<desc>`
    /// element records the line and point counts and the extrusion height.
    #[must_use]
    pub fn render(&self) -> String {
        let params = &self.params;
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n\
             <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
            params.background_color,
            w = params.width,
            h = params.height,
        );

        let extrusion = self
            .extrusion_height
            .map_or_else(|| "none".to_string(), |h| format!("{h:.3}"));
        let _ = writeln!(
            svg,
            "<desc>lines={} points={} extrusion={extrusion}</desc>",
            self.lines.len(),
            self.points.len()
        );

        let view = Viewport::fit(
            self.lines
                .iter()
                .flat_map(Line::points)
                .chain(self.points.iter().copied()),
            params,
        );
        if let Some(view) = view {
            for line in &self.lines {
                segment(&mut svg, &view, line, &params.stroke_color, params.stroke_width);
                svg.push_str("/>\n");
            }
            if params.mark_named_faces {
                for face in &self.faces {
                    let width = params.stroke_width * 2.0;
                    segment(&mut svg, &view, &face.line, &params.highlight_color, width);
                    let _ = writeln!(svg, "><title>{}</title></line>", face.boundary);
                }
            }
            if params.show_points {
                for point in &self.points {
                    let (cx, cy) = view.map(*point);
                    let _ = writeln!(
                        svg,
                        "<circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{:.2}\" fill=\"{}\"/>",
                        params.stroke_width * 1.5,
                        params.stroke_color
                    );
                }
            }
        }

        svg.push_str("</svg>\n");
        svg
    }
}

/// Open a `<line` element for `line`; the caller closes it.
fn segment(svg: &mut String, view: &Viewport, line: &Line, color: &str, width: f64) {
    let (x1, y1) = view.map(line.start());
    let (x2, y2) = view.map(line.end());
    let _ = write!(
        svg,
        "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{color}\" stroke-width=\"{width:.2}\""
    );
}

impl DesignInterface for SvgInterface {
    fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    fn add_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    fn create_geometry(&mut self, lattice: &Lattice, extrusion_height: f64) -> DesignResult<()> {
        validate_extrusion_height(extrusion_height)?;
        self.faces = named_faces(lattice)?;
        let points = self.trace_lattice(lattice);
        self.extrusion_height = Some(extrusion_height);
        debug!(
            points,
            lines = self.lines.len(),
            faces = self.faces.len(),
            "Plotted lattice"
        );
        Ok(())
    }
}

/// Export a lattice outline to SVG.
///
/// Walls are drawn in the stroke color and, if enabled, named boundary faces
/// on top in the highlight color with their name as a tooltip.
///
/// # Errors
///
/// Returns an error if the lattice has no inlet or outlet channels.
///
/// # Example
///
/// ```
/// use channel_design::{export_lattice_svg, SvgExportParams};
/// use channel_lattice::create_lattice;
///
/// let lattice = create_lattice(&[2, 1, 2, 1, 1], 5.0, 0.5).unwrap();
/// let svg = export_lattice_svg(&lattice, &SvgExportParams::default()).unwrap();
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains("aqueous_inlet_1"));
/// ```
pub fn export_lattice_svg(lattice: &Lattice, params: &SvgExportParams) -> DesignResult<String> {
    let mut plot = SvgInterface::new(params.clone());
    plot.faces = named_faces(lattice)?;
    plot.trace_lattice(lattice);
    Ok(plot.render())
}
