use serde::Serialize;

use super::error::Error;

pub const DEFAULT_SPEED: f64 = 50.0;
pub const DEFAULT_ANGLE: f64 = 45.0;
pub const STANDARD_GRAVITY: f64 = 9.81;
pub const DEFAULT_SAMPLE_STEPS: usize = 100;

/// Validated launch conditions for a drag-free projectile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Launch {
    speed: f64,
    angle_deg: f64,
    gravity: f64,
}

/// Closed-form flight characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FlightSummary {
    /// Seconds until the projectile returns to launch height.
    pub flight_time: f64,
    /// Apex height in meters.
    pub max_height: f64,
    /// Horizontal distance in meters at landing.
    pub range: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectoryPoint {
    pub t: f64,
    pub x: f64,
    pub y: f64,
}

impl Default for Launch {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            angle_deg: DEFAULT_ANGLE,
            gravity: STANDARD_GRAVITY,
        }
    }
}

impl Launch {
    pub fn new(speed: f64, angle_deg: f64, gravity: f64) -> Result<Self, Error> {
        if !(speed.is_finite() && speed > 0.0) {
            return Err(Error::InvalidSpeed(speed));
        }
        if !(0.0..=90.0).contains(&angle_deg) {
            return Err(Error::InvalidAngle(angle_deg));
        }
        if !(gravity.is_finite() && gravity > 0.0) {
            return Err(Error::InvalidGravity(gravity));
        }
        Ok(Self {
            speed,
            angle_deg,
            gravity,
        })
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    #[inline]
    fn angle_rad(&self) -> f64 {
        self.angle_deg.to_radians()
    }

    pub fn summary(&self) -> FlightSummary {
        let (v0, g, theta) = (self.speed, self.gravity, self.angle_rad());
        let sin = theta.sin();
        FlightSummary {
            flight_time: 2.0 * v0 * sin / g,
            max_height: v0 * v0 * sin * sin / (2.0 * g),
            range: v0 * v0 * (2.0 * theta).sin() / g,
        }
    }

    /// Position at time `t`; `y` goes negative after landing.
    pub fn position_at(&self, t: f64) -> [f64; 2] {
        let theta = self.angle_rad();
        let x = self.speed * theta.cos() * t;
        let y = self.speed * theta.sin() * t - 0.5 * self.gravity * t * t;
        [x, y]
    }

    /// `steps + 1` evenly spaced points from launch to landing.
    pub fn sample(&self, steps: usize) -> Vec<TrajectoryPoint> {
        let flight_time = self.summary().flight_time;
        let steps = steps.max(1);
        (0..=steps)
            .map(|i| {
                let t = flight_time * i as f64 / steps as f64;
                let [x, y] = self.position_at(t);
                TrajectoryPoint { t, x, y }
            })
            .collect()
    }
}
