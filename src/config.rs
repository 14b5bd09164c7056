//! Configuration for the dashboard window.
//!
//! [`DashboardConfig`] is the in-memory form handed to
//! [`run_dashboard`](crate::run_dashboard). [`DashboardConfigSerde`] is its
//! file form; it is read from `$HOME/.mse_dashboard/config.yaml` when present
//! and every missing key falls back to the default.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::Parameters;
use crate::progress::DEFAULT_PROGRESS_STEP;
use crate::trace_look::{SeriesLook, SeriesLookSerde};

// ─────────────────────────────────────────────────────────────────────────────
// Plot appearance
// ─────────────────────────────────────────────────────────────────────────────

/// Size, labels and series styling of the rendered comparison plot.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotStyle {
    /// Output image width in pixels.
    pub width_px: u32,
    /// Output image height in pixels.
    pub height_px: u32,
    /// Legend label of the first series.
    pub label_1: String,
    /// Legend label of the second series.
    pub label_2: String,
    pub x_label: String,
    pub y_label: String,
    /// Accessibility description attached to the image.
    pub alt_text: String,
    /// Styling of the first series (solid by default).
    pub series_1: SeriesLook,
    /// Styling of the second series (dashed by default).
    pub series_2: SeriesLook,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width_px: 640,
            height_px: 480,
            label_1: "Function 1".to_string(),
            label_2: "Function 2".to_string(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            alt_text: "Comparison plot".to_string(),
            series_1: SeriesLook::new(0),
            series_2: SeriesLook::dashed(1),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle optional parts of the UI. Both default to `true`.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureFlags {
    /// Offer a zoomable egui_plot view of the same snapshot next to the image.
    pub interactive_plot: bool,
    /// Offer a "Save plot..." button for the rendered PNG.
    pub save_plot: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            interactive_plot: true,
            save_plot: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DashboardConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the dashboard.
///
/// | Field            | Purpose |
/// |------------------|---------|
/// | `initial`        | Slider values at start-up |
/// | `progress_step`  | Delay between two progress ticks |
/// | `plot`           | Rendered image size, labels and series styling |
/// | `features`       | Toggle optional UI parts |
#[derive(Clone)]
pub struct DashboardConfig {
    /// Native window title.
    pub title: String,
    /// Heading rendered above the controls.
    pub headline: String,
    /// Slider values at start-up (clamped into the slider ranges).
    pub initial: Parameters,
    /// Delay between two of the 100 progress ticks. Zero shows results at once.
    pub progress_step: Duration,
    pub plot: PlotStyle,
    pub features: FeatureFlags,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "MSE Dashboard".to_string(),
            headline: "MSE calculation".to_string(),
            initial: Parameters::default(),
            progress_step: DEFAULT_PROGRESS_STEP,
            plot: PlotStyle::default(),
            features: FeatureFlags::default(),
            native_options: None,
        }
    }
}

impl DashboardConfig {
    /// `$HOME/.mse_dashboard/config.yaml`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let home = std::env::var("HOME").map_err(|_| ConfigError::NoHome)?;
        Ok(PathBuf::from(home).join(".mse_dashboard").join("config.yaml"))
    }

    /// Load from the default path; a missing or unreadable file yields the defaults.
    pub fn load_or_default() -> Self {
        let path = match Self::default_path() {
            Ok(p) => p,
            Err(e) => {
                log::debug!("No config path: {e}");
                return Self::default();
            }
        };
        if !path.exists() {
            log::debug!("Config file {:?} does not exist, using defaults", path);
            return Self::default();
        }
        match Self::load_from_path(&path) {
            Ok(cfg) => {
                log::info!("Loaded config from {:?}", path);
                cfg
            }
            Err(e) => {
                log::warn!("Ignoring config {:?}: {e}", path);
                Self::default()
            }
        }
    }

    /// Load a YAML file, or JSON when the extension is `.json`.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let serde: DashboardConfigSerde = if is_json(path) {
            serde_json::from_str(&s)?
        } else {
            serde_yaml::from_str(&s)?
        };
        Ok(serde.into())
    }

    /// Write the file form of this config, creating parent directories.
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let serde = DashboardConfigSerde::from(self);
        let s = if is_json(path) {
            serde_json::to_string_pretty(&serde)?
        } else {
            serde_yaml::to_string(&serde)?
        };
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(io_err)?;
        }
        fs::write(path, s).map_err(io_err)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

// ---------- Serializable mirror ----------

/// File form of [`DashboardConfig`]. Unknown window options are not stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfigSerde {
    pub title: String,
    pub headline: String,
    pub initial: Parameters,
    pub progress_step_ms: u64,
    pub plot_width_px: u32,
    pub plot_height_px: u32,
    pub label_1: String,
    pub label_2: String,
    pub x_label: String,
    pub y_label: String,
    pub alt_text: String,
    pub series_1: SeriesLookSerde,
    pub series_2: SeriesLookSerde,
    pub interactive_plot: bool,
    pub save_plot: bool,
}

impl Default for DashboardConfigSerde {
    fn default() -> Self {
        (&DashboardConfig::default()).into()
    }
}

impl From<&DashboardConfig> for DashboardConfigSerde {
    fn from(c: &DashboardConfig) -> Self {
        Self {
            title: c.title.clone(),
            headline: c.headline.clone(),
            initial: c.initial,
            progress_step_ms: c.progress_step.as_millis() as u64,
            plot_width_px: c.plot.width_px,
            plot_height_px: c.plot.height_px,
            label_1: c.plot.label_1.clone(),
            label_2: c.plot.label_2.clone(),
            x_label: c.plot.x_label.clone(),
            y_label: c.plot.y_label.clone(),
            alt_text: c.plot.alt_text.clone(),
            series_1: (&c.plot.series_1).into(),
            series_2: (&c.plot.series_2).into(),
            interactive_plot: c.features.interactive_plot,
            save_plot: c.features.save_plot,
        }
    }
}

impl From<DashboardConfigSerde> for DashboardConfig {
    fn from(s: DashboardConfigSerde) -> Self {
        Self {
            title: s.title,
            headline: s.headline,
            initial: s.initial.clamped(),
            progress_step: Duration::from_millis(s.progress_step_ms),
            plot: PlotStyle {
                width_px: s.plot_width_px.clamp(64, 4096),
                height_px: s.plot_height_px.clamp(64, 4096),
                label_1: s.label_1,
                label_2: s.label_2,
                x_label: s.x_label,
                y_label: s.y_label,
                alt_text: s.alt_text,
                series_1: s.series_1.into(),
                series_2: s.series_2.into(),
            },
            features: FeatureFlags {
                interactive_plot: s.interactive_plot,
                save_plot: s.save_plot,
            },
            native_options: None,
        }
    }
}
