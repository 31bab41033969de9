//! Small, self-contained STEM computations for teaching tools.
//!
//! Every module is independent and stateless apart from the explicit session
//! objects it hands out. Nothing here draws anything; results are plain data
//! that a front end renders however it likes.
//!
//! # Features
//!
//! - **Nucleotide analysis**: base counts, composition, GC-content,
//!   complementary strand and short repeated patterns
//! - **Molecule building**: 2D atom placement, last-two-atom bonding,
//!   molecular formula and weight, preset molecules
//! - **Projectile motion**: closed-form flight time, apex and range, plus a
//!   frame-driven playback state machine
//! - **Function plotting**: a restricted expression parser, dense sampling,
//!   gap-aware polylines, y-range fitting and grid ticks
//! - **Code playground**: a line scanner that echoes what simple `print` and
//!   `console.log` statements would show, without running anything
//!
//! # Quick Start
//!
//! ```
//! use stemlab::bio::analyze;
//! use stemlab::chem::MoleculeBuilder;
//! use stemlab::io::default_presets;
//! use stemlab::math::Function;
//! use stemlab::physics::Launch;
//!
//! // DNA composition
//! let dna = analyze("ATCGATCG").expect("valid bases");
//! assert_eq!(dna.counts.g, 2);
//! assert!((dna.gc_content - 50.0).abs() < 1e-9);
//!
//! // Methane from the preset catalog
//! let mut builder = MoleculeBuilder::new();
//! builder.load(default_presets().molecule("Methane").unwrap())?;
//! assert_eq!(builder.formula().to_string(), "CH4");
//! assert!((builder.molecular_weight() - 16.04).abs() < 0.01);
//!
//! // A 45 degree launch at 50 m/s
//! let flight = Launch::new(50.0, 45.0, 9.81)?.summary();
//! assert!((flight.range - 254.9).abs() < 0.1);
//!
//! // y = x^2
//! assert_eq!(Function::parse("x^2").eval(2.0), 4.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Organization
//!
//! - [`bio`]: sequence analysis and random sequences
//! - [`chem`]: the molecule builder, formulas and templates
//! - [`physics`]: launches, trajectories and playback
//! - [`math`]: expression parsing and plot geometry
//! - [`playground`]: the pseudo-interpreter
//! - [`io`]: preset catalogs, molecule scripts, FASTA input, CSV and JSON
//!   output
//!
//! # Data Types
//!
//! - [`Element`]: builder elements with display name, color, radius and
//!   atomic weight
//! - [`Nucleotide`]: the four DNA bases
//! - [`Sequence`]: a filtered base sequence
//! - [`Atom`], [`Bond`], [`Molecule`]: the builder's molecule

mod model;

pub mod bio;
pub mod chem;
pub mod io;
pub mod math;
pub mod physics;
pub mod playground;

pub use model::atom::Atom;
pub use model::molecule::{Bond, Molecule};
pub use model::sequence::Sequence;
pub use model::types::{Element, Nucleotide, ParseElementError, ParseNucleotideError};
