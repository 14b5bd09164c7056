//! SeriesLook: visual styling shared by the rendered image and the
//! interactive plot.

use eframe::egui;
use egui_plot::LineStyle;
use serde::{Deserialize, Serialize};

/// Color, stroke width and line style of one plotted series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLook {
    pub color: egui::Color32,
    pub width: f32,
    pub style: LineStyle,
}

impl Default for SeriesLook {
    fn default() -> Self {
        Self {
            color: egui::Color32::GRAY,
            width: 1.5,
            style: LineStyle::Solid,
        }
    }
}

impl SeriesLook {
    /// Solid line with a color allocated from the series index.
    pub fn new(index: usize) -> Self {
        Self {
            color: Self::alloc_color(index),
            ..Default::default()
        }
    }

    /// Dashed line with a color allocated from the series index.
    pub fn dashed(index: usize) -> Self {
        Self {
            style: LineStyle::Dashed { length: 6.0 },
            ..Self::new(index)
        }
    }

    /// Allocate a distinct color for the given series index.
    pub fn alloc_color(index: usize) -> egui::Color32 {
        const PALETTE: [egui::Color32; 10] = [
            egui::Color32::from_rgb(31, 119, 180),
            egui::Color32::from_rgb(255, 127, 14),
            egui::Color32::from_rgb(44, 160, 44),
            egui::Color32::from_rgb(214, 39, 40),
            egui::Color32::from_rgb(148, 103, 189),
            egui::Color32::from_rgb(140, 86, 75),
            egui::Color32::from_rgb(227, 119, 194),
            egui::Color32::from_rgb(127, 127, 127),
            egui::Color32::from_rgb(188, 189, 34),
            egui::Color32::from_rgb(23, 190, 207),
        ];
        PALETTE[index % PALETTE.len()]
    }

    /// Dash and gap length in pixels, `None` for solid lines.
    pub fn dash_pattern(&self) -> Option<(u32, u32)> {
        let px = |v: f32| v.round().max(1.0) as u32;
        match self.style {
            LineStyle::Solid => None,
            LineStyle::Dashed { length } => Some((px(length), px(length * 0.6))),
            LineStyle::Dotted { spacing } => Some((px(self.width), px(spacing))),
        }
    }
}

// ---------- Serializable mirror ----------

/// Serializable version of egui_plot::LineStyle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SerLineStyle {
    Solid,
    Dashed { length: f32 },
    Dotted { spacing: f32 },
}

/// Serializable version of SeriesLook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesLookSerde {
    pub color_rgba: [u8; 4],
    pub width: f32,
    pub style: SerLineStyle,
}

impl From<&SeriesLook> for SeriesLookSerde {
    fn from(l: &SeriesLook) -> Self {
        let style = match l.style {
            LineStyle::Solid => SerLineStyle::Solid,
            LineStyle::Dashed { length } => SerLineStyle::Dashed { length },
            LineStyle::Dotted { spacing } => SerLineStyle::Dotted { spacing },
        };
        Self {
            color_rgba: [l.color.r(), l.color.g(), l.color.b(), l.color.a()],
            width: l.width,
            style,
        }
    }
}

impl From<SeriesLookSerde> for SeriesLook {
    fn from(s: SeriesLookSerde) -> Self {
        let [r, g, b, a] = s.color_rgba;
        let style = match s.style {
            SerLineStyle::Solid => LineStyle::Solid,
            SerLineStyle::Dashed { length } => LineStyle::Dashed { length },
            SerLineStyle::Dotted { spacing } => LineStyle::Dotted { spacing },
        };
        Self {
            color: egui::Color32::from_rgba_unmultiplied(r, g, b, a),
            width: s.width.max(0.1),
            style,
        }
    }
}
