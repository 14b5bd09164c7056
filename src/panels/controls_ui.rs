use std::time::Instant;

use egui::Ui;

use super::panel_trait::{DashboardData, Panel, PanelState};
use crate::model::{Parameters, AMPLITUDE_RANGE, POINT_COUNT_RANGE};

/// Stable names of the input widgets.
pub mod input_names {
    pub const N_POINTS: &str = "n_points";
    pub const AMPLITUDE_1: &str = "amplitude_1";
    pub const AMPLITUDE_2: &str = "amplitude_2";
    pub const CALCULATE: &str = "calculate";
}

/// Sliders for the three parameters and the calculate button.
pub struct ControlsPanel {
    pub state: PanelState,
}

impl Default for ControlsPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Parameters", egui_phosphor::regular::SLIDERS_HORIZONTAL),
        }
    }
}

impl ControlsPanel {
    pub const N_POINTS_LABEL: &'static str = "Number of points";
    pub const AMPLITUDE_1_LABEL: &'static str = "Amplitude of function 1";
    pub const AMPLITUDE_2_LABEL: &'static str = "Amplitude of function 2";
    pub const CALCULATE_LABEL: &'static str = "Calculate";
}

impl Panel for ControlsPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, data: &mut DashboardData<'_>) {
        let mut params: Parameters = data.controller.parameters();

        ui.push_id(input_names::N_POINTS, |ui| {
            ui.label(Self::N_POINTS_LABEL);
            ui.add(egui::Slider::new(&mut params.point_count, POINT_COUNT_RANGE));
        });
        ui.push_id(input_names::AMPLITUDE_1, |ui| {
            ui.label(Self::AMPLITUDE_1_LABEL);
            ui.add(egui::Slider::new(&mut params.amplitude_1, AMPLITUDE_RANGE).step_by(0.1));
        });
        ui.push_id(input_names::AMPLITUDE_2, |ui| {
            ui.label(Self::AMPLITUDE_2_LABEL);
            ui.add(egui::Slider::new(&mut params.amplitude_2, AMPLITUDE_RANGE).step_by(0.1));
        });
        data.controller.on_parameters_changed(params);

        ui.add_space(8.0);
        let clicked = ui
            .push_id(input_names::CALCULATE, |ui| {
                ui.button(format!(
                    "{} {}",
                    egui_phosphor::regular::CALCULATOR,
                    Self::CALCULATE_LABEL
                ))
                .on_hover_text("Compute the MSE and render the comparison plot")
                .clicked()
            })
            .inner;
        if clicked {
            data.controller.on_calculate_triggered(Instant::now());
            ui.ctx().request_repaint();
        }
    }
}
