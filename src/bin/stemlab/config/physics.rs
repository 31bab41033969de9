use anyhow::{Context, Result};

use stemlab::physics::{FrameClock, Launch};

use crate::cli::{LaunchOptions, PlaybackOptions};

pub fn build_launch(opts: &LaunchOptions) -> Result<Launch> {
    Launch::new(opts.speed, opts.angle, opts.gravity).context("Invalid launch parameters")
}

pub fn build_frame_clock(opts: &PlaybackOptions) -> Result<FrameClock> {
    FrameClock::new(opts.fps).context("Invalid --fps")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_outside_quadrant_is_rejected() {
        let opts = LaunchOptions {
            speed: 20.0,
            angle: 95.0,
            gravity: 9.81,
        };
        let err = build_launch(&opts).unwrap_err();
        assert!(err.downcast_ref::<stemlab::physics::Error>().is_some());
    }

    #[test]
    fn zero_fps_is_rejected() {
        let opts = PlaybackOptions {
            steps: 10,
            animate: true,
            fps: 0.0,
        };
        assert!(build_frame_clock(&opts).is_err());
    }
}
