use mse_dashboard::config::PlotStyle;
use mse_dashboard::model::generate_series;
use mse_dashboard::render::*;
use mse_dashboard::SeriesLook;

fn renderer(width_px: u32, height_px: u32) -> SvgPlotRenderer {
    SvgPlotRenderer::new(PlotStyle {
        width_px,
        height_px,
        ..PlotStyle::default()
    })
}

#[test]
fn png_decodes_with_configured_size() {
    let series = generate_series(50, 1.0, 1.5).unwrap();
    let artifact = renderer(320, 240).render(&series).unwrap();
    assert_eq!((artifact.width(), artifact.height()), (320, 240));

    let decoded = image::load_from_memory(artifact.png()).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (320, 240));
    let ink = decoded.pixels().filter(|p| p.0 != [255, 255, 255, 255]).count();
    assert!(ink > 0, "plot should not be blank");
}

#[test]
fn color_image_matches_artifact_size() {
    let series = generate_series(10, 2.0, 0.5).unwrap();
    let artifact = renderer(200, 150).render(&series).unwrap();
    let img = artifact.color_image();
    assert_eq!(img.size, [200, 150]);
    assert_eq!(artifact.alt_text(), "Comparison plot");
}

#[test]
fn svg_has_legend_and_axis_labels() {
    let series = generate_series(20, 1.0, 2.0).unwrap();
    let svg = renderer(640, 480).to_svg(&series).unwrap();
    assert!(svg.contains(">Function 1<"));
    assert!(svg.contains(">Function 2<"));
    assert!(svg.contains(">x<"));
    assert!(svg.contains(">y<"));
}

#[test]
fn second_series_is_drawn_dashed() {
    let series = generate_series(20, 1.0, 2.0).unwrap();
    let dashed = renderer(640, 480).to_svg(&series).unwrap();
    let solid = SvgPlotRenderer::new(PlotStyle {
        series_2: SeriesLook::new(1),
        ..PlotStyle::default()
    })
    .to_svg(&series)
    .unwrap();
    // each dash is its own path segment
    assert!(dashed.matches("<polyline").count() > solid.matches("<polyline").count() + 4);
}

#[test]
fn equal_amplitudes_still_render() {
    let series = generate_series(10, 1.0, 1.0).unwrap();
    assert!(renderer(200, 150).render(&series).is_ok());
}

#[test]
fn too_small_image_is_a_render_failure() {
    let series = generate_series(10, 1.0, 2.0).unwrap();
    let err = renderer(40, 40).render(&series).unwrap_err();
    assert!(err.is_render_failure(), "{err}");
}

#[test]
fn encode_png_rejects_short_buffers() {
    let err = encode_png(4, 4, &[0u8; 10]).unwrap_err();
    assert!(err.is_render_failure());
}

#[test]
fn save_png_writes_payload() {
    let series = generate_series(10, 1.0, 2.0).unwrap();
    let artifact = renderer(200, 150).render(&series).unwrap();
    let path = std::env::temp_dir().join(format!("mse_dashboard_plot_{}.png", std::process::id()));
    artifact.save_png(&path).unwrap();
    let written = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(written, artifact.png());
}
