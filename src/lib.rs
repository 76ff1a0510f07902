//! Air Mouse - control the pointer with hand gestures.
//!
//! This is the main library crate. It turns a stream of hand landmarks into
//! smoothed cursor motion and debounced pointer events (click, double click,
//! drag, scroll, right click).

pub mod annotate;
pub mod capture;
pub mod cli;
pub mod commands;
pub mod config;
pub mod controller;
pub mod gesture;
pub mod pointer;
pub mod processing;
pub mod session;

pub use config::AirMouseConfig;
pub use controller::{AirMouse, FrameOutcome};
pub use gesture::{GestureClassifier, GestureEvent, GestureState};
pub use pointer::{PointerSink, ScreenPoint};
pub use processing::PositionSmoother;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging
///
/// `RUST_LOG` takes precedence over the default filter.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "air_mouse=debug" } else { "air_mouse=info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Air Mouse v{}", env!("CARGO_PKG_VERSION"));
}
