//! Drag-free projectile motion.
//!
//! [`Launch`] holds validated launch conditions and answers closed-form
//! questions (flight time, apex, range, position at time `t`). [`Playback`]
//! animates a launch frame by frame for a caller-owned clock such as
//! [`FrameClock`].
//!
//! ```
//! use stemlab::physics::Launch;
//!
//! let summary = Launch::new(50.0, 45.0, 9.81)?.summary();
//! assert!((summary.flight_time - 7.21).abs() < 0.01);
//! assert!((summary.range - 254.9).abs() < 0.1);
//! assert!((summary.max_height - 63.7).abs() < 0.1);
//! # Ok::<(), stemlab::physics::Error>(())
//! ```

mod error;
mod playback;
mod projectile;

pub use error::Error;
pub use playback::{DEFAULT_FRAME_RATE, FrameClock, Playback, PlaybackStats, Tick};
pub use projectile::{
    DEFAULT_ANGLE, DEFAULT_SAMPLE_STEPS, DEFAULT_SPEED, FlightSummary, Launch, STANDARD_GRAVITY,
    TrajectoryPoint,
};
