pub mod chart;

mod banner;
mod error;
mod progress;
mod tables;

pub use banner::{banner_for_help, print_banner};
pub use error::print_error;
pub use progress::{FlightBar, Progress};
pub use tables::{
    print_composition, print_element_distribution, print_flight_summary, print_molecule_summary,
    print_patterns, print_playback_stats, print_plot_summary, print_run_summary,
    print_sequence_summary,
};

#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub interactive: bool,
}

impl Context {
    pub fn detect() -> Self {
        Self {
            interactive: crate::io::stderr_is_tty(),
        }
    }

    pub fn with_quiet(self, quiet: bool) -> Self {
        Self {
            interactive: self.interactive && !quiet,
        }
    }
}
