//! Per-frame update: poll progress, then lay out the panels.

use std::time::Instant;

use eframe::egui;

use super::DashboardApp;
use crate::panels::{DashboardData, Panel};

impl DashboardApp {
    /// Advance the progress ticker and schedule the next repaint while a
    /// cycle is running. Never blocks.
    fn poll_progress(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        for tick in self.controller.advance_progress(now) {
            log::trace!("progress {tick}%");
        }
        if let Some(due) = self.controller.next_progress_due() {
            ctx.request_repaint_after(due.saturating_duration_since(now));
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_progress(ctx);

        egui::TopBottomPanel::top("dashboard_headline").show(ctx, |ui| {
            ui.heading(self.config.headline.as_str());
        });

        let Self {
            controller,
            left_side_panels,
            result_panel,
            config,
        } = self;
        let mut data = DashboardData {
            controller,
            config,
        };

        egui::SidePanel::left("dashboard_controls")
            .resizable(false)
            .min_width(240.0)
            .show(ctx, |ui| {
                for panel in left_side_panels.iter_mut() {
                    if !panel.state().visible {
                        continue;
                    }
                    ui.strong(panel.title_and_icon());
                    ui.separator();
                    panel.render_panel(ui, &mut data);
                    ui.add_space(12.0);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                result_panel.render_panel(ui, &mut data);
            });
        });
    }
}
