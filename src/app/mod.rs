//! Main application module for the dashboard.
//!
//! | Sub-module | Responsibility |
//! | ---------- | -------------- |
//! | [`update`] | Per-frame progress polling and panel layout |
//! | [`run`]    | Top-level [`run_dashboard()`] entry point and icon loading |

mod run;
mod update;

pub use run::run_dashboard;

use crate::config::DashboardConfig;
use crate::controller::DashboardController;
use crate::panels::{ControlsPanel, Panel, ResultPanel};

/// Standalone dashboard application that implements [`eframe::App`].
///
/// One `DashboardApp` is one session: it owns exactly one
/// [`DashboardController`] and the panels that read from it.
pub struct DashboardApp {
    /// Session state: parameters, memoized series and the current cycle.
    pub controller: DashboardController,

    /// Panels docked to the left side (the parameter controls).
    pub left_side_panels: Vec<Box<dyn Panel>>,

    /// Panel filling the central area (status, result and plot).
    pub result_panel: ResultPanel,

    config: DashboardConfig,
}

impl DashboardApp {
    pub fn new(cfg: &DashboardConfig) -> Self {
        Self::with_controller(DashboardController::new(cfg), cfg)
    }

    /// Wrap an existing controller, e.g. one with a custom plot backend.
    pub fn with_controller(controller: DashboardController, cfg: &DashboardConfig) -> Self {
        let mut app = Self {
            controller,
            left_side_panels: vec![Box::new(ControlsPanel::default())],
            result_panel: ResultPanel::default(),
            config: DashboardConfig::default(),
        };
        app.apply_config(cfg);
        app
    }

    /// Apply a [`DashboardConfig`]: slider start values, progress pacing and
    /// plot options.
    pub(crate) fn apply_config(&mut self, cfg: &DashboardConfig) {
        self.controller.on_parameters_changed(cfg.initial.clamped());
        self.controller.set_progress_step(cfg.progress_step);
        self.config = DashboardConfig {
            native_options: None,
            ..cfg.clone()
        };
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }
}
