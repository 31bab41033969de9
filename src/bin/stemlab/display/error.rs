use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    if let Some(hints) = HintCollector::collect(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

/// First error of type `E` anywhere in the chain.
fn find<E: std::error::Error + 'static>(err: &Error) -> Option<&E> {
    err.chain().find_map(|cause| cause.downcast_ref::<E>())
}

struct HintCollector {
    hints: Vec<String>,
    typed: bool,
}

impl HintCollector {
    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self {
            hints: Vec::new(),
            typed: false,
        };

        collector.io_hints(err);
        collector.molecule_hints(err);
        collector.expression_hints(err);
        collector.launch_hints(err);

        if !collector.typed {
            collector.fallback_hints(err);
        }

        (!collector.hints.is_empty()).then_some(collector.hints)
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn io_hints(&mut self, err: &Error) {
        use stemlab::io::{Error as IoError, Format};

        let Some(io_err) = find::<IoError>(err) else {
            return;
        };

        match io_err {
            IoError::Io { source } => {
                self.typed = true;
                self.std_io_hints(source);
            }

            IoError::Parse { format, line, .. } => {
                self.typed = true;
                self.add(format!("Check line {} of the {} input", line, format));
                match format {
                    Format::Fasta => {
                        self.add("Every '>' header needs at least one sequence line");
                        self.add("Lines starting with ';' are treated as comments");
                    }
                    Format::MoleculeScript => {
                        self.add("Commands: atom <EL> <X> <Y>, place <X> <Y>, select <EL>, bond, clear, preset <NAME>");
                        self.add("Element symbols are case-sensitive: H C N O F Cl Br S");
                    }
                }
            }

            IoError::Catalog(_) => {
                self.typed = true;
                self.add("The --presets file is not a valid catalog");
                self.add("Use [[sequences]], [[molecules]] and [[functions]] tables");
                self.add("Compare with `stemlab presets --json` for the expected fields");
            }

            IoError::Json(_) => {
                self.typed = true;
                self.add("Result could not be encoded as JSON");
                self.add("This may indicate a bug; please report if reproducible");
            }

            // Reported by molecule_hints.
            IoError::Molecule(_) => {}
        }
    }

    fn std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }
            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }
            ErrorKind::InvalidData => {
                self.add("Input is not valid UTF-8 text");
            }
            ErrorKind::BrokenPipe => {
                self.add("Output consumer closed the pipe early");
                self.add("This may occur when piping to commands like `head`");
            }
            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn molecule_hints(&mut self, err: &Error) {
        use stemlab::chem::Error as ChemError;

        let Some(chem_err) = find::<ChemError>(err) else {
            return;
        };

        self.typed = true;

        match chem_err {
            ChemError::UnknownPreset(name) => {
                self.add(format!("No molecule named '{}' in the catalog", name));
                self.add("List available molecules with `stemlab presets molecules`");
            }
            ChemError::InvalidBond { template, .. } => {
                self.add(format!("Preset '{}' has a broken bond list", template));
                self.add("Bond indices are zero-based positions in the atoms list");
                self.add("Each pair must join two different atoms, once");
            }
        }
    }

    fn expression_hints(&mut self, err: &Error) {
        use stemlab::math::{Error as MathError, Func};

        let Some(math_err) = find::<MathError>(err) else {
            return;
        };

        self.typed = true;

        if let Some(pos) = math_err.position() {
            self.add(format!("Problem starts at character {}", pos + 1));
        }

        match math_err {
            MathError::UnknownIdentifier { .. } | MathError::MissingArgument { .. } => {
                let names: Vec<&str> = Func::ALL.iter().map(|f| f.name()).collect();
                self.add("The variable is x; constants are pi and e");
                self.add(format!("Functions: {}", names.join(", ")));
            }
            MathError::UnexpectedToken { .. } | MathError::UnexpectedChar { .. } => {
                self.add("Multiplication must be explicit: write 2*x, not 2x");
                self.add("Operators: + - * / ^ (or **)");
            }
            MathError::TooDeep { .. } => {
                self.add("Remove redundant parentheses or signs, or split the expression");
            }
            MathError::InvalidViewport { axis } => {
                self.add(format!("--{axis}-min must be below --{axis}-max"));
            }
            _ => {
                self.add("Example: sin(x) * x^2");
            }
        }
    }

    fn launch_hints(&mut self, err: &Error) {
        use stemlab::physics::Error as PhysicsError;

        let Some(physics_err) = find::<PhysicsError>(err) else {
            return;
        };

        self.typed = true;

        match physics_err {
            PhysicsError::InvalidSpeed(_) => self.add("--speed must be a positive number"),
            PhysicsError::InvalidAngle(_) => self.add("--angle is measured in degrees from 0 to 90"),
            PhysicsError::InvalidGravity(_) => {
                self.add("--gravity must be positive; Earth is 9.81, the Moon 1.62")
            }
            PhysicsError::InvalidFrameRate(_) => self.add("--fps must be positive, e.g. 30 or 60"),
        }
    }

    fn fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("terminal") || msg.contains("stdin") {
            self.add("Provide input via -i/--input or pipe data to stdin");
        } else if msg.contains("unknown preset") {
            self.add("List available presets with `stemlab presets`");
        } else if msg.contains("cannot infer format") {
            self.add("Recognized extensions: .txt, .json, .csv, .mols");
        } else if msg.contains("no valid bases") {
            self.add("Only A, T, C and G (either case) are counted");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    err.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}
