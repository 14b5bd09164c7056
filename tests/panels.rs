use mse_dashboard::panels::*;

#[test]
fn inputs_use_stable_names() {
    assert_eq!(input_names::N_POINTS, "n_points");
    assert_eq!(input_names::AMPLITUDE_1, "amplitude_1");
    assert_eq!(input_names::AMPLITUDE_2, "amplitude_2");
    assert_eq!(input_names::CALCULATE, "calculate");
}

#[test]
fn control_labels() {
    assert_eq!(ControlsPanel::N_POINTS_LABEL, "Number of points");
    assert_eq!(ControlsPanel::CALCULATE_LABEL, "Calculate");
}

#[test]
fn full_label_contains_both_icon_and_title() {
    let p = ControlsPanel::default();
    let label = p.title_and_icon();
    assert!(label.contains(p.title()));
    assert!(label.contains(p.icon_only().unwrap()));
}

#[test]
fn result_panel_starts_without_texture() {
    let p = ResultPanel::default();
    assert_eq!(p.title(), "Result");
    assert_eq!(p.texture_generation(), None);
    assert!(p.state().visible);
}

mod headless {
    use std::time::{Duration, Instant};

    use mse_dashboard::panels::*;
    use mse_dashboard::*;

    fn config() -> DashboardConfig {
        DashboardConfig {
            progress_step: Duration::ZERO,
            plot: PlotStyle {
                width_px: 200,
                height_px: 150,
                ..PlotStyle::default()
            },
            ..DashboardConfig::default()
        }
    }

    fn render_frame(
        ctx: &egui::Context,
        panel: &mut dyn Panel,
        ctrl: &mut DashboardController,
        cfg: &DashboardConfig,
    ) {
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let mut data = DashboardData {
                    controller: &mut *ctrl,
                    config: cfg,
                };
                panel.render_panel(ui, &mut data);
            });
        });
    }

    fn allocated_textures(ctx: &egui::Context) -> usize {
        ctx.tex_manager().read().num_allocated()
    }

    #[test]
    fn superseded_plot_texture_is_released() {
        let ctx = egui::Context::default();
        let cfg = config();
        let mut ctrl = DashboardController::new(&cfg);
        let mut panel = ResultPanel::default();

        render_frame(&ctx, &mut panel, &mut ctrl, &cfg);
        assert_eq!(panel.texture_generation(), None);

        ctrl.on_calculate_triggered(Instant::now());
        ctrl.finish_progress();
        render_frame(&ctx, &mut panel, &mut ctrl, &cfg);
        assert_eq!(panel.texture_generation(), Some(1));
        let with_plot = allocated_textures(&ctx);

        // nothing is shown while the next cycle is computing
        ctrl.on_calculate_triggered(Instant::now());
        render_frame(&ctx, &mut panel, &mut ctrl, &cfg);
        assert_eq!(panel.texture_generation(), None);
        assert_eq!(allocated_textures(&ctx), with_plot - 1);

        ctrl.finish_progress();
        render_frame(&ctx, &mut panel, &mut ctrl, &cfg);
        assert_eq!(panel.texture_generation(), Some(2));
        assert_eq!(allocated_textures(&ctx), with_plot);
    }

    #[test]
    fn failed_render_uploads_no_texture() {
        struct NoPlot;
        impl PlotBackend for NoPlot {
            fn render(&self, _series: &SampleSeries) -> Result<PlotArtifact, DashboardError> {
                Err(DashboardError::RenderFailure("disabled".to_string()))
            }
        }

        let ctx = egui::Context::default();
        let cfg = config();
        let mut ctrl =
            DashboardController::with_backend(Parameters::default(), Duration::ZERO, Box::new(NoPlot));
        let mut panel = ResultPanel::default();
        ctrl.on_calculate_triggered(Instant::now());
        ctrl.finish_progress();
        render_frame(&ctx, &mut panel, &mut ctrl, &cfg);
        assert_eq!(panel.texture_generation(), None);
        assert!(ctrl.result_text().is_some());
    }

    #[test]
    fn sliders_push_clamped_values_into_the_controller() {
        let ctx = egui::Context::default();
        let cfg = config();
        let mut ctrl = DashboardController::with_backend(
            Parameters::new(5, 9.0, 0.1),
            Duration::ZERO,
            Box::new(SvgPlotRenderer::new(cfg.plot.clone())),
        );
        let mut panel = ControlsPanel::default();

        render_frame(&ctx, &mut panel, &mut ctrl, &cfg);
        let params = ctrl.parameters();
        assert_eq!(params.point_count, 10);
        assert!((params.amplitude_1 - 5.0).abs() < 1e-9);
        assert!((params.amplitude_2 - 0.5).abs() < 1e-9);
        assert_eq!(ctrl.trigger_count(), 0);
    }
}
