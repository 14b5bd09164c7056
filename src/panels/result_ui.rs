use egui::Ui;
use egui_plot::{Legend, Line, Plot};

use super::panel_trait::{DashboardData, Panel, PanelState};
use crate::config::PlotStyle;
use crate::controller::{Calculation, CycleState};
use crate::render::PlotArtifact;

/// Status line, progress bar, result text and the comparison plot.
///
/// Owns the GPU texture of the visible plot. The texture is replaced when a
/// newer calculation becomes visible and dropped as soon as no plot is shown,
/// so at most one plot texture is alive at a time.
pub struct ResultPanel {
    pub state: PanelState,
    texture: Option<(u64, egui::TextureHandle)>,
    show_interactive: bool,
    last_save_error: Option<String>,
}

impl Default for ResultPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Result", egui_phosphor::regular::CHART_LINE),
            texture: None,
            show_interactive: false,
            last_save_error: None,
        }
    }
}

impl ResultPanel {
    pub const SAVE_PLOT_LABEL: &'static str = "Save plot...";
    pub const INTERACTIVE_LABEL: &'static str = "Interactive view";

    /// Trigger number of the plot currently uploaded as a texture.
    pub fn texture_generation(&self) -> Option<u64> {
        self.texture.as_ref().map(|(generation, _)| *generation)
    }

    fn sync_texture(&mut self, ctx: &egui::Context, visible: Option<(u64, &PlotArtifact)>) {
        match visible {
            Some((generation, artifact)) => {
                if self.texture_generation() != Some(generation) {
                    let handle = ctx.load_texture(
                        format!("mse_plot_{generation}"),
                        artifact.color_image(),
                        egui::TextureOptions::LINEAR,
                    );
                    // Replacing the handle frees the previous texture.
                    self.texture = Some((generation, handle));
                }
            }
            None => self.texture = None,
        }
    }

    fn render_image(&self, ui: &mut Ui, artifact: &PlotArtifact) {
        if let Some((_, handle)) = &self.texture {
            let sized = egui::load::SizedTexture::from_handle(handle);
            ui.add(egui::Image::new(sized).shrink_to_fit())
                .on_hover_text(artifact.alt_text());
        }
    }

    fn render_interactive(&self, ui: &mut Ui, calc: &Calculation, style: &PlotStyle) {
        Plot::new("comparison_plot")
            .legend(Legend::default())
            .x_axis_label(style.x_label.clone())
            .y_axis_label(style.y_label.clone())
            .height(320.0)
            .show(ui, |plot_ui| {
                for (label, look, points) in [
                    (&style.label_1, &style.series_1, calc.series.points_1()),
                    (&style.label_2, &style.series_2, calc.series.points_2()),
                ] {
                    plot_ui.line(
                        Line::new(label.as_str(), points)
                            .color(look.color)
                            .width(look.width)
                            .style(look.style),
                    );
                }
            });
    }

    #[cfg(feature = "save_dialog")]
    fn render_save_button(&mut self, ui: &mut Ui, artifact: &PlotArtifact) {
        let label = format!(
            "{} {}",
            egui_phosphor::regular::FLOPPY_DISK,
            Self::SAVE_PLOT_LABEL
        );
        if ui.button(label).clicked() {
            let default_name = format!(
                "mse_plot_{:.0}.png",
                chrono::Local::now().timestamp_millis()
            );
            if let Some(path) = rfd::FileDialog::new()
                .set_file_name(&default_name)
                .add_filter("PNG", &["png"])
                .save_file()
            {
                match artifact.save_png(&path) {
                    Ok(()) => {
                        log::info!("Saved plot to {:?}", path);
                        self.last_save_error = None;
                    }
                    Err(e) => {
                        log::warn!("Failed to save plot to {:?}: {e}", path);
                        self.last_save_error = Some(format!("Failed to save plot: {e}"));
                    }
                }
            }
        }
    }

    #[cfg(not(feature = "save_dialog"))]
    fn render_save_button(&mut self, _ui: &mut Ui, _artifact: &PlotArtifact) {}
}

impl Panel for ResultPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, data: &mut DashboardData<'_>) {
        let controller = &*data.controller;
        let features = &data.config.features;
        let style = &data.config.plot;

        let visible = controller
            .calculation()
            .and_then(|c| c.plot.as_ref().ok().map(|p| (c.trigger, p)));
        self.sync_texture(ui.ctx(), visible);

        let status = controller.status_text();
        if !status.is_empty() {
            ui.label(status);
        }
        if let Some(fraction) = controller.progress_fraction() {
            ui.add(egui::ProgressBar::new(fraction).show_percentage());
        }
        if controller.state() != CycleState::Ready {
            return;
        }

        if let Some(text) = controller.result_text() {
            ui.add(egui::Label::new(egui::RichText::new(text).monospace()));
        }
        if let Some(err) = controller.plot_error() {
            ui.colored_label(ui.visuals().warn_fg_color, format!("No plot: {err}"));
        }

        let Some(calc) = controller.calculation() else {
            return;
        };
        ui.add_space(6.0);
        if let Ok(artifact) = &calc.plot {
            ui.horizontal(|ui| {
                if features.save_plot {
                    self.render_save_button(ui, artifact);
                }
                if features.interactive_plot {
                    ui.checkbox(&mut self.show_interactive, Self::INTERACTIVE_LABEL);
                }
            });
            if let Some(err) = &self.last_save_error {
                ui.colored_label(ui.visuals().error_fg_color, err.as_str());
            }
            self.render_image(ui, artifact);
        }
        if features.interactive_plot && self.show_interactive {
            self.render_interactive(ui, calc, style);
        }
    }
}
