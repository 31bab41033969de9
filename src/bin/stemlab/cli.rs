use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::io::OutputFormat;

#[derive(Parser)]
#[command(
    name = "stemlab",
    about = "Interactive STEM computations from the command line",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log detail (-v info, -vv debug, -vvv trace); STEMLAB_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Additional preset catalog (TOML), merged over the built-in one
    #[arg(long, value_name = "FILE", global = true)]
    pub presets: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a DNA sequence: composition, GC-content, complement, repeats
    #[command(visible_alias = "d")]
    Dna(DnaArgs),

    /// Build a 2D molecule and report its formula and weight
    #[command(visible_alias = "m")]
    Molecule(MoleculeArgs),

    /// Simulate a drag-free projectile launch
    #[command(visible_alias = "p")]
    Projectile(ProjectileArgs),

    /// Sample and plot a function of x
    #[command(visible_alias = "f")]
    Plot(PlotArgs),

    /// Scan Python or JavaScript source in the playground
    #[command(visible_alias = "r")]
    Run(RunArgs),

    /// List preset sequences, molecules, functions and playground examples
    Presets(PresetsArgs),
}

impl Command {
    pub fn quiet(&self) -> bool {
        match self {
            Command::Dna(args) => args.io.quiet,
            Command::Molecule(args) => args.io.quiet,
            Command::Projectile(args) => args.output.quiet,
            Command::Plot(args) => args.output.quiet,
            Command::Run(args) => args.io.quiet,
            Command::Presets(args) => args.quiet,
        }
    }
}

/// Input and output options for commands that read a file.
#[derive(Args)]
pub struct IoOptions {
    /// Input file (stdin if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub out: OutputOptions,

    /// Suppress banner, progress and tables (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output options for commands that generate their own data.
#[derive(Args)]
pub struct GeneratedOutput {
    #[command(flatten)]
    pub out: OutputOptions,

    /// Suppress banner, progress and tables (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct OutputOptions {
    /// Output file(s), repeatable; format inferred from the extension
    #[arg(short, long, value_name = "FILE", action = ArgAction::Append)]
    pub output: Vec<PathBuf>,

    /// Format for stdout or for the first output file
    #[arg(long = "outfmt", value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

#[derive(Args)]
pub struct DnaArgs {
    /// Sequence text; other characters than A, T, C, G are ignored
    #[arg(value_name = "SEQUENCE")]
    pub sequence: Option<String>,

    #[command(flatten)]
    pub source: SequenceSource,

    #[command(flatten)]
    pub patterns: PatternOptions,

    #[command(flatten)]
    pub io: IoOptions,
}

#[derive(Args)]
#[command(next_help_heading = "Sequence Source")]
pub struct SequenceSource {
    /// Analyze a named preset sequence
    #[arg(long, value_name = "NAME", conflicts_with_all = ["sequence", "random"])]
    pub preset: Option<String>,

    /// Analyze a random sequence
    #[arg(long, conflicts_with = "sequence")]
    pub random: bool,

    /// Length of the random sequence
    #[arg(long, value_name = "N", default_value_t = stemlab::bio::DEFAULT_RANDOM_LENGTH, requires = "random")]
    pub length: usize,

    /// Seed for a reproducible random sequence
    #[arg(long, value_name = "SEED", requires = "random")]
    pub seed: Option<u64>,
}

#[derive(Args)]
#[command(next_help_heading = "Repeat Search")]
pub struct PatternOptions {
    /// Shortest repeated substring to report
    #[arg(long = "min-pattern", value_name = "LEN", default_value_t = 2)]
    pub min_len: usize,

    /// Longest repeated substring to report
    #[arg(long = "max-pattern", value_name = "LEN", default_value_t = 6)]
    pub max_len: usize,

    /// Maximum number of repeats to report
    #[arg(long = "max-patterns", value_name = "N", default_value_t = 5)]
    pub max_patterns: usize,
}

#[derive(Args)]
pub struct MoleculeArgs {
    /// Start from a preset molecule (script commands from --input still
    /// apply afterwards)
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    #[command(flatten)]
    pub io: IoOptions,
}

#[derive(Args)]
pub struct ProjectileArgs {
    #[command(flatten)]
    pub launch: LaunchOptions,

    #[command(flatten)]
    pub playback: PlaybackOptions,

    #[command(flatten)]
    pub output: GeneratedOutput,
}

#[derive(Args)]
#[command(next_help_heading = "Launch")]
pub struct LaunchOptions {
    /// Initial speed (m/s)
    #[arg(long, value_name = "M/S", default_value_t = stemlab::physics::DEFAULT_SPEED)]
    pub speed: f64,

    /// Launch angle above the horizontal (degrees, 0 to 90)
    #[arg(long, value_name = "DEG", default_value_t = stemlab::physics::DEFAULT_ANGLE)]
    pub angle: f64,

    /// Gravitational acceleration (m/s²)
    #[arg(long, value_name = "M/S²", default_value_t = stemlab::physics::STANDARD_GRAVITY)]
    pub gravity: f64,
}

#[derive(Args)]
#[command(next_help_heading = "Trajectory")]
pub struct PlaybackOptions {
    /// Number of intervals in the sampled trajectory
    #[arg(long, value_name = "N", default_value_t = stemlab::physics::DEFAULT_SAMPLE_STEPS)]
    pub steps: usize,

    /// Play the flight in real time and record the animated trace instead
    #[arg(long)]
    pub animate: bool,

    /// Frames per second while animating
    #[arg(long, value_name = "FPS", default_value_t = stemlab::physics::DEFAULT_FRAME_RATE, requires = "animate")]
    pub fps: f64,
}

#[derive(Args)]
pub struct PlotArgs {
    /// Expression in x, e.g. "sin(x) * x^2"
    #[arg(value_name = "EXPRESSION", conflicts_with = "preset")]
    pub expression: Option<String>,

    /// Plot a named preset function
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    #[command(flatten)]
    pub viewport: ViewportOptions,

    /// Number of sampling intervals across the x-domain
    #[arg(long, value_name = "N", default_value_t = stemlab::math::DEFAULT_RESOLUTION)]
    pub resolution: usize,

    #[command(flatten)]
    pub output: GeneratedOutput,
}

#[derive(Args)]
#[command(next_help_heading = "Viewport")]
pub struct ViewportOptions {
    #[arg(long = "x-min", value_name = "X", default_value_t = -10.0, allow_hyphen_values = true)]
    pub x_min: f64,

    #[arg(long = "x-max", value_name = "X", default_value_t = 10.0, allow_hyphen_values = true)]
    pub x_max: f64,

    #[arg(long = "y-min", value_name = "Y", default_value_t = -10.0, allow_hyphen_values = true)]
    pub y_min: f64,

    #[arg(long = "y-max", value_name = "Y", default_value_t = 10.0, allow_hyphen_values = true)]
    pub y_max: f64,

    /// Fit the y-range to the function over the x-domain
    #[arg(long = "auto-scale")]
    pub auto_scale: bool,
}

#[derive(Args)]
pub struct RunArgs {
    /// Source language (inferred from the input extension, else python)
    #[arg(short, long, value_name = "LANG")]
    pub language: Option<LanguageArg>,

    /// Run a bundled example instead of reading input
    #[arg(long, value_name = "NAME", conflicts_with = "input")]
    pub example: Option<String>,

    #[command(flatten)]
    pub io: IoOptions,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LanguageArg {
    /// Python
    #[value(alias = "py")]
    Python,
    /// JavaScript
    #[value(alias = "js")]
    Javascript,
}

impl From<LanguageArg> for stemlab::playground::Language {
    fn from(value: LanguageArg) -> Self {
        match value {
            LanguageArg::Python => Self::Python,
            LanguageArg::Javascript => Self::JavaScript,
        }
    }
}

#[derive(Args)]
pub struct PresetsArgs {
    /// Only list one kind of preset
    #[arg(value_name = "KIND")]
    pub kind: Option<PresetKind>,

    /// Print the catalog as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Suppress the banner
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetKind {
    /// Sample DNA sequences
    #[value(alias = "dna")]
    Sequences,
    /// Ready-made molecules
    Molecules,
    /// Common functions of x
    Functions,
    /// Playground snippets
    Examples,
}

pub fn parse() -> Cli {
    Cli::parse()
}
