use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

const SPINNER_TICKS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Scale of the flight bar; positions are thousandths of the flight time.
const FLIGHT_BAR_LEN: u64 = 1000;

/// Step-by-step spinner on stderr with a tick line per finished step.
pub struct StepSpinner {
    spinner: Option<ProgressBar>,
    started: Instant,
    step_started: Instant,
    current: u8,
    total: u8,
}

impl StepSpinner {
    pub fn new(total: u8) -> Self {
        let now = Instant::now();
        Self {
            spinner: None,
            started: now,
            step_started: now,
            current: 0,
            total,
        }
    }

    pub fn step(&mut self, description: &str) {
        self.clear();
        self.current += 1;
        self.step_started = Instant::now();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("  {spinner:.cyan} {msg}")
                .expect("static spinner template")
                .tick_chars(SPINNER_TICKS),
        );
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner.set_message(format!("[{}/{}] {}...", self.current, self.total, description));
        self.spinner = Some(spinner);
    }

    pub fn complete_step(&mut self, description: &str, substeps: &[&str]) {
        self.clear();

        let secs = self.step_started.elapsed().as_secs_f64();
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "  \x1b[32m✓\x1b[0m {description:<44} {secs:>5.1}s");
        for substep in substeps {
            let _ = writeln!(stderr, "      \x1b[2m·\x1b[0m {substep}");
        }
    }

    pub fn finish(mut self) {
        self.clear();

        let total = format!("Total: {:.2}s", self.started.elapsed().as_secs_f64());
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr);
        let _ = writeln!(stderr, "  \x1b[2m╺{}╸\x1b[0m", "━".repeat(54));
        let _ = writeln!(stderr);
        let _ = writeln!(stderr, "  \x1b[32m✓\x1b[0m Done {total:>45}");
        let _ = writeln!(stderr);
    }

    fn clear(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

/// Either a visible [`StepSpinner`] or nothing at all.
pub enum Progress {
    Interactive(StepSpinner),
    Silent,
}

impl Progress {
    pub fn new(interactive: bool, total_steps: u8) -> Self {
        if interactive {
            Self::Interactive(StepSpinner::new(total_steps))
        } else {
            Self::Silent
        }
    }

    pub fn step(&mut self, description: &str) {
        if let Self::Interactive(s) = self {
            s.step(description);
        }
    }

    pub fn complete_step(&mut self, description: &str, substeps: &[&str]) {
        if let Self::Interactive(s) = self {
            s.complete_step(description, substeps);
        }
    }

    pub fn finish(self) {
        if let Self::Interactive(s) = self {
            s.finish();
        }
    }
}

/// Live view of a playing flight: elapsed time against flight time plus the
/// current position.
pub struct FlightBar {
    bar: ProgressBar,
    flight_time: f64,
}

impl FlightBar {
    pub fn new(visible: bool, flight_time: f64) -> Self {
        let bar = if visible {
            let bar = ProgressBar::new(FLIGHT_BAR_LEN);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("  {bar:40.cyan/blue} {msg}")
                    .expect("static flight bar template")
                    .progress_chars("█▓░"),
            );
            bar
        } else {
            ProgressBar::hidden()
        };
        Self { bar, flight_time }
    }

    pub fn update(&self, t: f64, position: [f64; 2]) {
        let fraction = if self.flight_time > 0.0 {
            (t / self.flight_time).clamp(0.0, 1.0)
        } else {
            1.0
        };
        self.bar
            .set_position((fraction * FLIGHT_BAR_LEN as f64).round() as u64);
        self.bar.set_message(format!(
            "t={:>6.2}s  x={:>8.2}m  y={:>7.2}m",
            t, position[0], position[1]
        ));
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
