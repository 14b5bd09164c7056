//! MSE dashboard crate root: re-exports and module wiring.
//!
//! A native egui/eframe window with three sliders and a calculate button.
//! Each calculation samples `a1 * sin(x)` and `a2 * sin(x)` over `[0, 2π]`,
//! reports their mean squared error and renders a comparison plot.
//!
//! - `model`: pure series generation and the error metric
//! - `controller`: per-session state, memoized series and the calculation cycle
//! - `progress`: cosmetic, polled progress ticks
//! - `render`: plotters chart rasterized to a PNG [`PlotArtifact`]
//! - `config`: window and plot configuration, loadable from YAML
//! - `app` / `panels`: the eframe application and its panels

pub mod app;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod panels;
pub mod progress;
pub mod render;
pub mod trace_look;

// Public re-exports for a compact external API
pub use app::{run_dashboard, DashboardApp};
pub use config::{DashboardConfig, FeatureFlags, PlotStyle};
pub use controller::{format_result, Calculation, CycleOutcome, CycleState, DashboardController};
pub use error::{ConfigError, DashboardError};
pub use model::{generate_series, mean_squared_error, Parameters, SampleSeries};
pub use progress::{ProgressTicker, ProgressTicks, PROGRESS_STEPS};
pub use render::{PlotArtifact, PlotBackend, SvgPlotRenderer};
pub use trace_look::SeriesLook;
