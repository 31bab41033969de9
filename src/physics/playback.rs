use serde::Serialize;
use tracing::debug;

use super::error::Error;
use super::projectile::{FlightSummary, Launch};

pub const DEFAULT_FRAME_RATE: f64 = 60.0;

/// Values shown next to the animation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PlaybackStats {
    pub max_height: f64,
    pub range: f64,
    pub flight_time: f64,
    pub current_time: f64,
}

impl PlaybackStats {
    fn from_summary(summary: FlightSummary) -> Self {
        Self {
            max_height: summary.max_height,
            range: summary.range,
            flight_time: summary.flight_time,
            current_time: 0.0,
        }
    }
}

/// Result of advancing the animation by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// The projectile was drawn at `position` at time `t`.
    Frame { t: f64, position: [f64; 2] },
    /// The flight ended during this frame; stats are frozen at landing.
    Landed,
    /// Nothing is playing.
    Idle,
}

/// Per-frame driver for the projectile animation.
///
/// The owner calls [`tick`](Playback::tick) once per display refresh with
/// the time elapsed since [`start`](Playback::start). Playback ends on its
/// own as soon as the elapsed time passes the flight time, and can be torn
/// down early with [`stop`](Playback::stop), [`reset`](Playback::reset) or
/// by changing the launch with [`set_launch`](Playback::set_launch).
#[derive(Debug, Clone)]
pub struct Playback {
    launch: Launch,
    playing: bool,
    stats: PlaybackStats,
    trail: Vec<[f64; 2]>,
}

impl Playback {
    pub fn new(launch: Launch) -> Self {
        Self {
            launch,
            playing: false,
            stats: PlaybackStats::default(),
            trail: Vec::new(),
        }
    }

    pub fn launch(&self) -> &Launch {
        &self.launch
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn stats(&self) -> &PlaybackStats {
        &self.stats
    }

    pub fn trail(&self) -> &[[f64; 2]] {
        &self.trail
    }

    /// Replaces the launch used by the next run, cancelling a run in
    /// progress.
    pub fn set_launch(&mut self, launch: Launch) {
        if self.playing {
            debug!("launch changed during playback, stopping");
        }
        self.stop();
        self.launch = launch;
    }

    /// Starts a fresh run from the current launch, or pauses a running one.
    pub fn start(&mut self) {
        if self.playing {
            self.stop();
            return;
        }

        self.stats = PlaybackStats::from_summary(self.launch.summary());
        self.trail.clear();
        self.playing = true;
        debug!(
            flight_time = self.stats.flight_time,
            range = self.stats.range,
            "playback started"
        );
    }

    pub fn tick(&mut self, elapsed: f64) -> Tick {
        if !self.playing {
            return Tick::Idle;
        }

        if elapsed <= self.stats.flight_time {
            let position = self.launch.position_at(elapsed);
            self.trail.push(position);
            self.stats.current_time = elapsed;
            Tick::Frame {
                t: elapsed,
                position,
            }
        } else {
            self.playing = false;
            self.stats.current_time = self.stats.flight_time;
            debug!(frames = self.trail.len(), "projectile landed");
            Tick::Landed
        }
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Stops playback, clears the trace and zeroes every stat.
    pub fn reset(&mut self) {
        self.stop();
        self.trail.clear();
        self.stats = PlaybackStats::default();
    }
}

/// Fixed-rate clock yielding elapsed seconds for successive frames.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_rate: f64,
    frame: u64,
}

impl FrameClock {
    pub fn new(frame_rate: f64) -> Result<Self, Error> {
        if !(frame_rate.is_finite() && frame_rate > 0.0) {
            return Err(Error::InvalidFrameRate(frame_rate));
        }
        Ok(Self {
            frame_rate,
            frame: 0,
        })
    }

    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }
}

impl Iterator for FrameClock {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let elapsed = self.frame as f64 / self.frame_rate;
        self.frame += 1;
        Some(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn run_to_end(playback: &mut Playback, fps: f64) -> usize {
        let mut frames = 0;
        for elapsed in FrameClock::new(fps).unwrap() {
            match playback.tick(elapsed) {
                Tick::Frame { .. } => frames += 1,
                Tick::Landed | Tick::Idle => break,
            }
        }
        frames
    }

    #[test]
    fn idle_until_started() {
        let mut p = Playback::new(Launch::default());
        assert_eq!(p.tick(0.0), Tick::Idle);
        assert_eq!(*p.stats(), PlaybackStats::default());
    }

    #[test]
    fn stops_after_flight_time_and_freezes_stats() {
        let mut p = Playback::new(Launch::default());
        p.start();
        let flight_time = p.stats().flight_time;

        let frames = run_to_end(&mut p, DEFAULT_FRAME_RATE);
        assert!(!p.is_playing());
        assert_eq!(p.stats().current_time, flight_time);
        assert_eq!(frames, p.trail().len());
        assert_eq!(frames, (flight_time * DEFAULT_FRAME_RATE).floor() as usize + 1);
        assert_eq!(p.tick(flight_time + 1.0), Tick::Idle);
    }

    #[test]
    fn frames_follow_the_closed_form_path() {
        let launch = Launch::new(20.0, 30.0, 9.81).unwrap();
        let mut p = Playback::new(launch);
        p.start();
        match p.tick(0.5) {
            Tick::Frame { t, position } => {
                assert_eq!(t, 0.5);
                assert_eq!(position, launch.position_at(0.5));
            }
            other => panic!("expected a frame, got {other:?}"),
        }
        assert!(approx_eq(p.stats().current_time, 0.5, 1e-12));
    }

    #[test]
    fn start_while_playing_pauses() {
        let mut p = Playback::new(Launch::default());
        p.start();
        p.tick(1.0);
        p.start();
        assert!(!p.is_playing());
        assert_eq!(p.trail().len(), 1);

        p.start();
        assert!(p.is_playing());
        assert!(p.trail().is_empty());
        assert_eq!(p.stats().current_time, 0.0);
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut p = Playback::new(Launch::default());
        p.start();
        p.tick(0.1);
        p.tick(0.2);
        p.reset();
        assert!(!p.is_playing());
        assert!(p.trail().is_empty());
        assert_eq!(*p.stats(), PlaybackStats::default());
    }

    #[test]
    fn changing_launch_cancels_the_run() {
        let mut p = Playback::new(Launch::default());
        p.start();
        p.set_launch(Launch::new(10.0, 80.0, 1.62).unwrap());
        assert_eq!(p.tick(0.1), Tick::Idle);

        p.start();
        assert!(approx_eq(
            p.stats().flight_time,
            2.0 * 10.0 * 80f64.to_radians().sin() / 1.62,
            1e-12
        ));
    }

    #[test]
    fn zero_length_flight_lands_after_first_frame() {
        let mut p = Playback::new(Launch::new(5.0, 0.0, 9.81).unwrap());
        p.start();
        assert!(matches!(p.tick(0.0), Tick::Frame { .. }));
        assert_eq!(p.tick(1.0 / 60.0), Tick::Landed);
    }

    #[test]
    fn frame_clock_validates_rate() {
        assert!(FrameClock::new(0.0).is_err());
        assert!(FrameClock::new(f64::INFINITY).is_err());
        let times: Vec<f64> = FrameClock::new(4.0).unwrap().take(3).collect();
        assert_eq!(times, vec![0.0, 0.25, 0.5]);
    }
}
