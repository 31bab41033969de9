use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::Error;
use super::function::Function;

/// Samples per plot: two per horizontal pixel of an 800 px canvas.
pub const DEFAULT_RESOLUTION: usize = 1600;
/// Samples taken across the x-domain when fitting the y-range.
pub const AUTO_SCALE_STEPS: usize = 100;
/// Share of the y-span added above and below by [`auto_scale`].
pub const AUTO_SCALE_PADDING: f64 = 0.1;
/// How far past the y-window a point may lie before the curve is broken,
/// as a share of the y-span (50 px on a 500 px canvas).
pub const CLIP_MARGIN: f64 = 0.1;

/// Visible window of the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x_min: -10.0,
            x_max: 10.0,
            y_min: -10.0,
            y_max: 10.0,
        }
    }
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, Error> {
        let viewport = Self {
            x_min,
            x_max,
            y_min,
            y_max,
        };
        viewport.validate()?;
        Ok(viewport)
    }

    pub fn validate(&self) -> Result<(), Error> {
        let ordered = |lo: f64, hi: f64| lo.is_finite() && hi.is_finite() && lo < hi;
        if !ordered(self.x_min, self.x_max) {
            return Err(Error::InvalidViewport { axis: 'x' });
        }
        if !ordered(self.y_min, self.y_max) {
            return Err(Error::InvalidViewport { axis: 'y' });
        }
        Ok(())
    }

    pub fn x_span(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn y_span(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Whether `y` is close enough to the window to be drawn.
    pub fn keeps(&self, y: f64) -> bool {
        let margin = self.y_span() * CLIP_MARGIN;
        y.is_finite() && y >= self.y_min - margin && y <= self.y_max + margin
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub x: f64,
    /// NaN where the function has no finite value.
    pub y: f64,
}

/// Evaluates `function` at `resolution + 1` evenly spaced x values covering
/// the viewport's domain, both ends included.
pub fn sample(function: &Function, viewport: &Viewport, resolution: usize) -> Vec<Sample> {
    let n = resolution.max(1);
    let span = viewport.x_span();
    (0..=n)
        .map(|i| {
            let x = viewport.x_min + span * i as f64 / n as f64;
            Sample {
                x,
                y: function.eval(x),
            }
        })
        .collect()
}

/// Splits samples into polylines that can be drawn as connected lines.
///
/// A line ends at every sample with no finite value or one lying more than
/// [`CLIP_MARGIN`] of the y-span outside the window. Runs shorter than two
/// points draw nothing and are dropped.
pub fn segments(samples: &[Sample], viewport: &Viewport) -> Vec<Vec<Sample>> {
    let mut lines = Vec::new();
    let mut current: Vec<Sample> = Vec::new();

    for s in samples {
        if viewport.keeps(s.y) {
            current.push(*s);
        } else if !current.is_empty() {
            if current.len() > 1 {
                lines.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
        }
    }
    if current.len() > 1 {
        lines.push(current);
    }

    lines
}

/// Fits the y-range to the function's finite values over the x-domain.
///
/// Returns `None` when no sample is finite, in which case the caller keeps
/// its current window. A flat function gets one unit of padding each way so
/// that the window keeps a positive height.
pub fn auto_scale(function: &Function, viewport: &Viewport) -> Option<Viewport> {
    let (lo, hi) = sample(function, viewport, AUTO_SCALE_STEPS)
        .iter()
        .map(|s| s.y)
        .filter(|y| y.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, y| match acc {
            None => Some((y, y)),
            Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
        })?;

    let span = hi - lo;
    let padding = if span > 0.0 {
        span * AUTO_SCALE_PADDING
    } else {
        1.0
    };

    let scaled = Viewport {
        y_min: lo - padding,
        y_max: hi + padding,
        ..*viewport
    };
    debug!(
        function = function.source(),
        y_min = scaled.y_min,
        y_max = scaled.y_max,
        "auto-scaled y-range"
    );
    Some(scaled)
}

/// Grid spacing for an axis covering `span`: the power of ten giving
/// roughly ten to a hundred lines.
pub fn grid_step(span: f64) -> f64 {
    10f64.powf((span / 10.0).log10().floor())
}

/// Labelled tick positions between `min` and `max` on the grid, leaving out
/// the origin where the axes cross.
pub fn ticks(min: f64, max: f64) -> Vec<f64> {
    let step = grid_step(max - min);
    if !(step.is_finite() && step > 0.0) {
        return Vec::new();
    }

    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last)
        .map(|k| k as f64 * step)
        .filter(|v| v.abs() > 0.001)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn window(x_min: f64, x_max: f64) -> Viewport {
        Viewport {
            x_min,
            x_max,
            ..Viewport::default()
        }
    }

    #[test]
    fn default_viewport_is_symmetric() {
        let v = Viewport::default();
        assert_eq!((v.x_min, v.x_max, v.y_min, v.y_max), (-10.0, 10.0, -10.0, 10.0));
        assert!(v.validate().is_ok());
    }

    #[test]
    fn viewport_rejects_inverted_or_infinite_ranges() {
        assert_eq!(
            Viewport::new(1.0, -1.0, 0.0, 1.0),
            Err(Error::InvalidViewport { axis: 'x' })
        );
        assert_eq!(
            Viewport::new(-1.0, 1.0, 0.0, f64::INFINITY),
            Err(Error::InvalidViewport { axis: 'y' })
        );
        assert_eq!(
            Viewport::new(-1.0, 1.0, 2.0, 2.0),
            Err(Error::InvalidViewport { axis: 'y' })
        );
    }

    #[test]
    fn sample_covers_domain_inclusively() {
        let f = Function::parse("x^2");
        let samples = sample(&f, &window(-2.0, 2.0), 4);
        let xs: Vec<f64> = samples.iter().map(|s| s.x).collect();
        let ys: Vec<f64> = samples.iter().map(|s| s.y).collect();
        assert_eq!(xs, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
        assert_eq!(ys, vec![4.0, 1.0, 0.0, 1.0, 4.0]);
    }

    #[test]
    fn auto_scale_square_on_small_domain() {
        let f = Function::parse("x^2");
        let v = auto_scale(&f, &window(-2.0, 2.0)).unwrap();
        assert!(v.y_min <= 0.0);
        assert!(v.y_max >= 4.0);
        assert!(approx_eq(v.y_min, -0.4, 1e-9));
        assert!(approx_eq(v.y_max, 4.4, 1e-9));
        assert_eq!((v.x_min, v.x_max), (-2.0, 2.0));
    }

    #[test]
    fn auto_scale_ignores_non_finite_samples() {
        let f = Function::parse("log(x)");
        let v = auto_scale(&f, &window(-1.0, 1.0)).unwrap();
        let lo = 0.02f64.ln();
        assert!(approx_eq(v.y_min, lo * 1.1, 1e-9));
        assert!(approx_eq(v.y_max, -lo * 0.1, 1e-9));
    }

    #[test]
    fn auto_scale_is_noop_without_finite_values() {
        let f = Function::parse("sqrt(x)");
        assert_eq!(auto_scale(&f, &window(-5.0, -1.0)), None);
        assert_eq!(auto_scale(&Function::parse("x +"), &Viewport::default()), None);
    }

    #[test]
    fn auto_scale_pads_flat_functions() {
        let v = auto_scale(&Function::parse("3"), &Viewport::default()).unwrap();
        assert_eq!((v.y_min, v.y_max), (2.0, 4.0));
    }

    #[test]
    fn segments_break_at_gaps() {
        let f = Function::parse("1/x");
        let v = Viewport::default();
        let samples = sample(&f, &v, 20);
        let lines = segments(&samples, &v);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].iter().all(|s| s.x < 0.0));
        assert!(lines[1].iter().all(|s| s.x > 0.0));
    }

    #[test]
    fn segments_clip_far_outside_window() {
        let v = Viewport::default();
        let samples = [
            Sample { x: 0.0, y: 0.0 },
            Sample { x: 1.0, y: 11.5 },
            Sample { x: 2.0, y: 13.0 },
            Sample { x: 3.0, y: 5.0 },
            Sample { x: 4.0, y: 6.0 },
            Sample { x: 5.0, y: f64::NAN },
            Sample { x: 6.0, y: 1.0 },
        ];
        let lines = segments(&samples, &v);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 2);
        assert_eq!(lines[1].len(), 2);
        assert_eq!(lines[1][0].x, 3.0);
    }

    #[test]
    fn grid_step_is_power_of_ten() {
        assert_eq!(grid_step(20.0), 1.0);
        assert_eq!(grid_step(200.0), 10.0);
        assert!(approx_eq(grid_step(4.0), 0.1, 1e-12));
    }

    #[test]
    fn ticks_skip_the_origin() {
        let t = ticks(-3.0, 3.0 + 17.0);
        assert_eq!(t.first(), Some(&-3.0));
        assert_eq!(t.last(), Some(&20.0));
        assert!(!t.contains(&0.0));
        assert_eq!(ticks(-10.0, 10.0).len(), 20);
    }
}
