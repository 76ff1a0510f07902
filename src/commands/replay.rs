//! Trace replay command
//!
//! Runs a recorded landmark trace through the full session loop against a
//! virtual pointer and reports what the gesture engine did.

use crate::annotate::HeadlessDisplay;
use crate::capture::ReplaySource;
use crate::config::AirMouseConfig;
use crate::controller::AirMouse;
use crate::pointer::{PointerAction, RecordingSink, ScreenSize};
use crate::session::{run_session, Clock, MonotonicClock, SessionSummary};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use uuid::Uuid;

/// Result of one replay
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayReport {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub trace: String,
    pub screen: ScreenSize,
    /// Wall time the replay took, in seconds
    pub wall_time_s: f64,
    pub summary: SessionSummary,
    pub actions: Vec<PointerAction>,
}

/// Replay `trace_path` and optionally write the report to `output`
pub fn replay_trace(
    config: &AirMouseConfig,
    trace_path: &Path,
    output: Option<&Path>,
    screen: ScreenSize,
) -> Result<ReplayReport> {
    let session_id = Uuid::new_v4();
    let started_at = Utc::now();
    let wall_clock = MonotonicClock::new();

    tracing::info!(
        "Replaying {} (session={}, screen={}x{})",
        trace_path.display(),
        session_id,
        screen.width,
        screen.height
    );

    let mut source = ReplaySource::open(trace_path, config.detection.clone())
        .with_context(|| format!("Failed to open trace {}", trace_path.display()))?;
    let clock = source.clock();
    let mut display = HeadlessDisplay::new(config.display.window_title.clone());

    let sink = RecordingSink::new(screen);
    let log = sink.log();
    let mut air_mouse = AirMouse::new(sink, config);

    let summary = run_session(&mut source, &mut display, &mut air_mouse, &clock, &config.display)
        .context("Replay session failed")?;
    let wall_time_s = wall_clock.now();
    tracing::info!("Replay finished in {:.3}s", wall_time_s);

    let report = ReplayReport {
        session_id,
        started_at,
        trace: trace_path.display().to_string(),
        screen,
        wall_time_s,
        summary,
        actions: log.snapshot(),
    };

    if let Some(path) = output {
        let data = serde_json::to_vec_pretty(&report).context("Failed to serialize report")?;
        std::fs::write(path, data)
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        tracing::info!("Wrote replay report to {}", path.display());
    }

    Ok(report)
}
