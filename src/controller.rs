//! Per-window dashboard state and its calculation cycle.
//!
//! [`DashboardController`] is the only stateful piece of the crate. It keeps
//! the current [`Parameters`], a series memoized on their identity, and the
//! state of the current cycle:
//!
//! ```text
//! Idle ──trigger──▶ Computing(1..=100) ──tick 100──▶ Ready(outcome)
//!                        ▲                               │
//!                        └───────────trigger─────────────┘
//! ```
//!
//! The outcome of a cycle is computed in full when the trigger arrives; only
//! its visibility waits for the progress ticks. `Idle` is never re-entered.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::model::{generate_series, Parameters, SampleSeries};
use crate::progress::{ProgressTicker, ProgressTicks};
use crate::render::{PlotArtifact, PlotBackend, SvgPlotRenderer};

/// Label in front of the formatted metric.
pub const RESULT_LABEL: &str = "Mean squared error (MSE)";

/// Result text for a computed metric, rounded to four decimals.
pub fn format_result(mse: f64) -> String {
    format!("{RESULT_LABEL}: {mse:.4}")
}

/// Everything one successful trigger produced, all from one series snapshot.
#[derive(Debug, Clone)]
pub struct Calculation {
    /// 1-based number of the trigger that produced this calculation.
    pub trigger: u64,
    pub parameters: Parameters,
    pub series: Arc<SampleSeries>,
    pub mse: f64,
    pub result_text: String,
    /// Rendered image, or the render failure that replaced it.
    pub plot: Result<PlotArtifact>,
}

/// Outcome of one trigger: a calculation, or the contract violation that
/// prevented it.
pub type CycleOutcome = Result<Calculation>;

/// Observable phase of the current cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    Idle,
    Computing,
    Ready,
}

enum Cycle {
    Idle,
    Computing(ProgressTicker),
    Ready,
}

/// Holds the state of one dashboard session.
pub struct DashboardController {
    parameters: Parameters,
    memo: Option<((usize, u64, u64), Arc<SampleSeries>)>,
    series_computations: u64,
    trigger_count: u64,
    progress_step: Duration,
    backend: Box<dyn PlotBackend>,
    cycle: Cycle,
    /// Outcome of the latest trigger, hidden until its cycle is `Ready`.
    outcome: Option<CycleOutcome>,
}

impl DashboardController {
    /// Controller with the SVG renderer configured from `cfg.plot`.
    pub fn new(cfg: &DashboardConfig) -> Self {
        Self::with_backend(
            cfg.initial,
            cfg.progress_step,
            Box::new(SvgPlotRenderer::new(cfg.plot.clone())),
        )
    }

    /// Controller with a custom plot backend.
    pub fn with_backend(
        initial: Parameters,
        progress_step: Duration,
        backend: Box<dyn PlotBackend>,
    ) -> Self {
        Self {
            parameters: initial,
            memo: None,
            series_computations: 0,
            trigger_count: 0,
            progress_step,
            backend,
            cycle: Cycle::Idle,
            outcome: None,
        }
    }

    pub fn parameters(&self) -> Parameters {
        self.parameters
    }

    /// Number of user-initiated calculations so far.
    pub fn trigger_count(&self) -> u64 {
        self.trigger_count
    }

    /// How many times a series was actually generated (memo misses).
    pub fn series_computations(&self) -> u64 {
        self.series_computations
    }

    pub fn progress_step(&self) -> Duration {
        self.progress_step
    }

    pub fn set_progress_step(&mut self, step: Duration) {
        self.progress_step = step;
    }

    /// Replace the stored parameters. The memoized series is dropped when any
    /// value differs. Returns whether anything changed.
    pub fn on_parameters_changed(&mut self, params: Parameters) -> bool {
        if params.cache_key() == self.parameters.cache_key() {
            return false;
        }
        log::debug!("Parameters changed: {:?} -> {:?}", self.parameters, params);
        self.parameters = params;
        if self
            .memo
            .as_ref()
            .is_some_and(|(key, _)| *key != params.cache_key())
        {
            self.memo = None;
        }
        true
    }

    /// Start a new cycle at `now`: compute the outcome for the current
    /// parameters and restart progress. Any previous cycle is discarded.
    pub fn on_calculate_triggered(&mut self, now: Instant) -> &CycleOutcome {
        self.trigger_count += 1;
        let outcome = self.calculate();
        match &outcome {
            Ok(calc) => log::info!(
                "Calculation #{} with {:?}: mse={:.6}{}",
                calc.trigger,
                calc.parameters,
                calc.mse,
                if calc.plot.is_ok() { "" } else { " (no plot)" }
            ),
            Err(e) => log::warn!("Calculation #{} failed: {e}", self.trigger_count),
        }
        self.cycle = Cycle::Computing(ProgressTicker::start(now, self.progress_step));
        self.outcome.insert(outcome)
    }

    /// Ticks that became due up to `now`. Emitting tick 100 makes the outcome
    /// visible.
    pub fn advance_progress(&mut self, now: Instant) -> ProgressTicks {
        self.step_cycle(|ticker| ticker.poll(now))
    }

    /// Emit all remaining ticks at once and make the outcome visible.
    pub fn finish_progress(&mut self) -> ProgressTicks {
        self.step_cycle(ProgressTicker::drain)
    }

    fn step_cycle(&mut self, step: impl FnOnce(&mut ProgressTicker) -> ProgressTicks) -> ProgressTicks {
        let Cycle::Computing(ticker) = &mut self.cycle else {
            return ProgressTicks::empty();
        };
        let ticks = step(ticker);
        if ticker.is_complete() {
            self.cycle = Cycle::Ready;
        }
        ticks
    }

    pub fn state(&self) -> CycleState {
        match self.cycle {
            Cycle::Idle => CycleState::Idle,
            Cycle::Computing(_) => CycleState::Computing,
            Cycle::Ready => CycleState::Ready,
        }
    }

    /// Ticker of the running cycle once it has emitted tick 1. A cycle
    /// triggered earlier in the same frame has nothing to show yet.
    fn shown_ticker(&self) -> Option<&ProgressTicker> {
        match &self.cycle {
            Cycle::Computing(ticker) if ticker.current() > 0 => Some(ticker),
            _ => None,
        }
    }

    /// Last emitted tick (1..=100) while computing, `None` otherwise.
    pub fn progress(&self) -> Option<u8> {
        self.shown_ticker().map(ProgressTicker::current)
    }

    /// Completed fraction while computing, once tick 1 was emitted.
    pub fn progress_fraction(&self) -> Option<f32> {
        self.shown_ticker().map(ProgressTicker::fraction)
    }

    /// When the UI should poll again.
    pub fn next_progress_due(&self) -> Option<Instant> {
        match &self.cycle {
            Cycle::Computing(ticker) => ticker.next_due(),
            Cycle::Idle | Cycle::Ready => None,
        }
    }

    /// Outcome of the last finished cycle; `None` while idle or computing.
    pub fn visible_outcome(&self) -> Option<&CycleOutcome> {
        match self.cycle {
            Cycle::Ready => self.outcome.as_ref(),
            Cycle::Idle | Cycle::Computing(_) => None,
        }
    }

    /// Visible calculation, if the last cycle succeeded.
    pub fn calculation(&self) -> Option<&Calculation> {
        self.visible_outcome().and_then(|o| o.as_ref().ok())
    }

    /// Short status line.
    pub fn status_text(&self) -> String {
        if let Some(tick) = self.progress() {
            return format!("Calculating... {tick}%");
        }
        match (&self.cycle, self.visible_outcome()) {
            (Cycle::Computing(_), _) => "Calculating...".to_string(),
            (_, Some(Ok(_))) => "Calculation complete".to_string(),
            (_, Some(Err(_))) => "Calculation failed".to_string(),
            (_, None) => String::new(),
        }
    }

    /// Verbatim result text: the metric, or the error that replaced it.
    pub fn result_text(&self) -> Option<String> {
        self.visible_outcome().map(|outcome| match outcome {
            Ok(calc) => calc.result_text.clone(),
            Err(e) => format!("Error: {e}"),
        })
    }

    /// Visible plot, if the last cycle produced one.
    pub fn plot(&self) -> Option<&PlotArtifact> {
        self.calculation().and_then(|c| c.plot.as_ref().ok())
    }

    /// Render failure of the visible calculation, if any.
    pub fn plot_error(&self) -> Option<&DashboardError> {
        self.calculation().and_then(|c| c.plot.as_ref().err())
    }

    fn calculate(&mut self) -> CycleOutcome {
        let params = self.parameters;
        params.validate()?;
        let series = self.series_for(params)?;
        let mse = series.mse()?;
        let plot = self.backend.render(&series);
        if let Err(e) = &plot {
            log::warn!("Plot rendering failed: {e}");
        }
        Ok(Calculation {
            trigger: self.trigger_count,
            parameters: params,
            series,
            mse,
            result_text: format_result(mse),
            plot,
        })
    }

    fn series_for(&mut self, params: Parameters) -> Result<Arc<SampleSeries>> {
        let key = params.cache_key();
        if let Some((cached_key, series)) = &self.memo {
            if *cached_key == key {
                return Ok(Arc::clone(series));
            }
        }
        let series = Arc::new(generate_series(
            params.point_count,
            params.amplitude_1,
            params.amplitude_2,
        )?);
        self.series_computations += 1;
        log::debug!("Generated series for {:?}", params);
        self.memo = Some((key, Arc::clone(&series)));
        Ok(series)
    }
}
