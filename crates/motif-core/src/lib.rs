//! # motif-core
//!
//! Core types and primitives for the Motif animation engine.
//! This crate contains foundational types shared across all Motif crates:
//! 2D math, colors, durations, easing functions, playback configuration,
//! and error types.

pub mod color;
pub mod config;
pub mod error;
pub mod math;
pub mod time;
pub mod types;

pub use color::Color;
pub use config::PlaybackConfig;
pub use error::{MotifError, MotifResult};
pub use math::{Point2D, Rect, Size2D, Transform2D};
pub use time::{Duration, Timestamp};
pub use types::Easing;
