//! Comparison plot rendering.
//!
//! The chart is drawn with `plotters` onto its SVG backend, rasterized with
//! usvg/resvg onto a white tiny-skia pixmap and encoded as PNG with `image`.
//! The result is a [`PlotArtifact`] that owns its buffers; dropping it
//! releases them.

use std::io::Cursor;
use std::ops::Range;

use eframe::egui;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::config::PlotStyle;
use crate::error::{DashboardError, Result};
use crate::model::SampleSeries;
use crate::trace_look::SeriesLook;

const MARGIN: u32 = 12;
const X_LABEL_AREA: u32 = 44;
const Y_LABEL_AREA: u32 = 56;
const FONT_SIZE: u32 = 14;
/// Smallest edge left for the plotting area itself.
const MIN_PLOT_AREA: u32 = 16;

/// A rendered plot image.
#[derive(Clone, PartialEq)]
pub struct PlotArtifact {
    width: u32,
    height: u32,
    png: Vec<u8>,
    rgba: Vec<u8>,
    alt_text: String,
}

impl std::fmt::Debug for PlotArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlotArtifact")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("png_bytes", &self.png.len())
            .field("alt_text", &self.alt_text)
            .finish()
    }
}

impl PlotArtifact {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Encoded PNG payload.
    pub fn png(&self) -> &[u8] {
        &self.png
    }

    /// Accessibility description of the image.
    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }

    /// Pixels for an egui texture.
    pub fn color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied(
            [self.width as usize, self.height as usize],
            &self.rgba,
        )
    }

    /// Write the PNG payload to `path`.
    pub fn save_png<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        std::fs::write(path, &self.png)
    }
}

/// Anything that can turn a series snapshot into an image.
pub trait PlotBackend {
    fn render(&self, series: &SampleSeries) -> Result<PlotArtifact>;
}

/// Default backend: a plotters chart rasterized with resvg.
pub struct SvgPlotRenderer {
    style: PlotStyle,
    options: usvg::Options<'static>,
}

impl SvgPlotRenderer {
    /// Build a renderer. System fonts are loaded once here so repeated
    /// renders stay cheap.
    pub fn new(style: PlotStyle) -> Self {
        let mut options = usvg::Options::default();
        options.fontdb_mut().load_system_fonts();
        if options.fontdb.len() == 0 {
            log::warn!("No system fonts found; plot text will not be drawn");
        }
        Self { style, options }
    }

    pub fn style(&self) -> &PlotStyle {
        &self.style
    }

    /// SVG markup of the chart for `series`.
    pub fn to_svg(&self, series: &SampleSeries) -> Result<String> {
        if series.is_empty() {
            return Err(DashboardError::EmptyInput);
        }
        let style = &self.style;
        let (w, h) = (style.width_px, style.height_px);
        if w < Y_LABEL_AREA + 2 * MARGIN + MIN_PLOT_AREA
            || h < X_LABEL_AREA + 2 * MARGIN + MIN_PLOT_AREA
        {
            return Err(DashboardError::RenderFailure(format!(
                "image {w}x{h} leaves no room for the plot area"
            )));
        }
        let (x_range, y_range) = data_ranges(series)?;

        let mut svg = String::new();
        draw_chart(&mut svg, (w, h), style, series, x_range, y_range)
            .map_err(|e| DashboardError::RenderFailure(e.to_string()))?;
        Ok(svg)
    }

    fn rasterize(&self, svg: &str) -> Result<(u32, u32, Vec<u8>)> {
        let tree = usvg::Tree::from_str(svg, &self.options)
            .map_err(|e| DashboardError::RenderFailure(format!("SVG parse: {e}")))?;
        let size = tree.size().to_int_size();
        let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or_else(|| {
            DashboardError::RenderFailure(format!(
                "cannot allocate {}x{} pixmap",
                size.width(),
                size.height()
            ))
        })?;
        pixmap.fill(tiny_skia::Color::WHITE);
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
        // Opaque background: premultiplied and straight alpha coincide.
        Ok((size.width(), size.height(), pixmap.take()))
    }
}

impl PlotBackend for SvgPlotRenderer {
    fn render(&self, series: &SampleSeries) -> Result<PlotArtifact> {
        let svg = self.to_svg(series)?;
        let (width, height, rgba) = self.rasterize(&svg)?;
        let png = encode_png(width, height, &rgba)?;
        Ok(PlotArtifact {
            width,
            height,
            png,
            rgba,
            alt_text: self.style.alt_text.clone(),
        })
    }
}

/// Encode straight-alpha RGBA pixels as PNG.
pub fn encode_png(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>> {
    let img = image::RgbaImage::from_raw(width, height, rgba.to_vec()).ok_or_else(|| {
        DashboardError::RenderFailure(format!(
            "pixel buffer of {} bytes does not fit {width}x{height}",
            rgba.len()
        ))
    })?;
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| DashboardError::RenderFailure(format!("PNG encode: {e}")))?;
    Ok(buf)
}

/// Axis ranges covering both series with 5% padding.
fn data_ranges(series: &SampleSeries) -> Result<(Range<f64>, Range<f64>)> {
    let xs = series.x();
    let (x_min, x_max) = (xs[0], xs[xs.len() - 1]);
    let (y_min, y_max) = series.y_range();
    if !(x_min.is_finite() && x_max.is_finite() && y_min.is_finite() && y_max.is_finite()) {
        return Err(DashboardError::RenderFailure(
            "series contains non-finite values".to_string(),
        ));
    }
    Ok((padded(x_min, x_max, 0.5), padded(y_min, y_max, 1.0)))
}

fn padded(lo: f64, hi: f64, widen: f64) -> Range<f64> {
    let (lo, hi) = if hi > lo { (lo, hi) } else { (lo - widen, hi + widen) };
    let pad = (hi - lo) * 0.05;
    (lo - pad)..(hi + pad)
}

fn draw_chart(
    svg: &mut String,
    size: (u32, u32),
    style: &PlotStyle,
    series: &SampleSeries,
    x_range: Range<f64>,
    y_range: Range<f64>,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::with_string(svg, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(MARGIN)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(style.x_label.as_str())
        .y_desc(style.y_label.as_str())
        .label_style(("sans-serif", FONT_SIZE))
        .axis_desc_style(("sans-serif", FONT_SIZE))
        .draw()?;

    for (label, look, ys) in [
        (&style.label_1, &style.series_1, series.y1()),
        (&style.label_2, &style.series_2, series.y2()),
    ] {
        let points: Vec<(f64, f64)> = series.x().iter().copied().zip(ys.iter().copied()).collect();
        let stroke = shape_style(look);
        match look.dash_pattern() {
            None => {
                chart
                    .draw_series(LineSeries::new(points, stroke))?
                    .label(label.as_str())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], stroke));
            }
            Some((dash, gap)) => {
                chart
                    .draw_series(DashedLineSeries::new(points, dash, gap, stroke))?
                    .label(label.as_str())
                    .legend(move |(x, y)| {
                        // two short dashes as the legend sample
                        let d = (dash as i32).min(10);
                        let second = d + (gap as i32).min(4);
                        EmptyElement::at((x, y))
                            + PathElement::new(vec![(0, 0), (d, 0)], stroke)
                            + PathElement::new(vec![(second, 0), (second + d, 0)], stroke)
                    });
            }
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font(("sans-serif", FONT_SIZE))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn shape_style(look: &SeriesLook) -> ShapeStyle {
    RGBColor(look.color.r(), look.color.g(), look.color.b())
        .stroke_width(look.width.round().max(1.0) as u32)
}
