//! Processing module for live cursor motion
//!
//! This module contains the filters that turn the raw fingertip position
//! into a steady on-screen cursor.

pub mod history;
pub mod smoother;

pub use history::{PointF, PositionHistory};
pub use smoother::PositionSmoother;
