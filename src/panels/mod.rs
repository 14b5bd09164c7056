pub mod controls_ui;
pub mod panel_trait;
pub mod result_ui;

pub use controls_ui::{input_names, ControlsPanel};
pub use panel_trait::{DashboardData, Panel, PanelState};
pub use result_ui::ResultPanel;
