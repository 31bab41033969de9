//! Line-oriented molecule scripts.
//!
//! Each non-blank line is one builder command; `#` starts a comment.
//!
//! ```text
//! preset Water          # replace everything with a preset molecule
//! atom C 400 250        # add an atom of an explicit element
//! select H              # element used by `place`
//! place 370 220         # add unless the point hits an existing atom
//! bond                  # bond the two most recent atoms
//! clear
//! ```

use std::io::{BufRead, Write};

use tracing::{debug, trace};

use super::presets::Presets;
use super::{Format, error::Error};
use crate::chem::{self, MoleculeBuilder, Placement};
use crate::model::molecule::Molecule;
use crate::model::types::Element;

/// Runs a script against a fresh builder.
pub fn read<R: BufRead>(reader: R, presets: &Presets) -> Result<MoleculeBuilder, Error> {
    let mut builder = MoleculeBuilder::new();
    apply(reader, &mut builder, presets)?;
    Ok(builder)
}

/// Runs a script against an existing builder. Commands before a failing
/// line stay applied.
pub fn apply<R: BufRead>(
    reader: R,
    builder: &mut MoleculeBuilder,
    presets: &Presets,
) -> Result<(), Error> {
    let mut commands = 0usize;
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let ln = i + 1;
        let content = strip_comment(&line).trim();
        if content.is_empty() {
            continue;
        }
        apply_command(content, ln, builder, presets)?;
        commands += 1;
    }
    debug!(commands, atoms = builder.atoms().len(), "molecule script applied");
    Ok(())
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn apply_command(
    content: &str,
    ln: usize,
    builder: &mut MoleculeBuilder,
    presets: &Presets,
) -> Result<(), Error> {
    let (keyword, rest) = match content.split_once(char::is_whitespace) {
        Some((k, r)) => (k, r.trim()),
        None => (content, ""),
    };
    let args: Vec<&str> = rest.split_whitespace().collect();

    match keyword.to_ascii_lowercase().as_str() {
        "atom" => {
            expect_args(&args, 3, "atom <element> <x> <y>", ln)?;
            let element = parse_element(args[0], ln)?;
            let x = parse_coord(args[1], "x", ln)?;
            let y = parse_coord(args[2], "y", ln)?;
            builder.add_atom(element, x, y);
        }
        "place" => {
            expect_args(&args, 2, "place <x> <y>", ln)?;
            let x = parse_coord(args[0], "x", ln)?;
            let y = parse_coord(args[1], "y", ln)?;
            if let Placement::Hit(index) = builder.place_atom(x, y) {
                trace!(ln, index, "placement landed on an existing atom");
            }
        }
        "select" => {
            expect_args(&args, 1, "select <element>", ln)?;
            builder.select_element(parse_element(args[0], ln)?);
        }
        "bond" => {
            expect_args(&args, 0, "bond", ln)?;
            if !builder.add_bond() {
                trace!(ln, "bond request ignored");
            }
        }
        "clear" => {
            expect_args(&args, 0, "clear", ln)?;
            builder.clear();
        }
        "preset" => {
            if rest.is_empty() {
                return Err(Error::parse(
                    Format::MoleculeScript,
                    ln,
                    "expected `preset <name>`",
                ));
            }
            let template = presets
                .molecule(rest)
                .ok_or_else(|| chem::Error::UnknownPreset(rest.to_string()))?;
            builder.load(template)?;
        }
        other => {
            return Err(Error::parse(
                Format::MoleculeScript,
                ln,
                format!("unknown command '{other}'"),
            ));
        }
    }
    Ok(())
}

fn expect_args(args: &[&str], count: usize, usage: &str, ln: usize) -> Result<(), Error> {
    if args.len() != count {
        return Err(Error::parse(
            Format::MoleculeScript,
            ln,
            format!("expected `{usage}`"),
        ));
    }
    Ok(())
}

fn parse_element(token: &str, ln: usize) -> Result<Element, Error> {
    token
        .parse::<Element>()
        .map_err(|e| Error::parse(Format::MoleculeScript, ln, e.to_string()))
}

fn parse_coord(token: &str, axis: &str, ln: usize) -> Result<f64, Error> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            Error::parse(
                Format::MoleculeScript,
                ln,
                format!("invalid {axis} coordinate '{token}'"),
            )
        })
}

/// Writes a script that rebuilds the atoms of `molecule`.
///
/// Bonds are emitted as `bond` lines right after the second atom of each
/// bond between consecutive atoms; other bonds cannot be expressed and are
/// listed as comments.
pub fn write<W: Write>(mut writer: W, molecule: &Molecule) -> Result<(), Error> {
    writeln!(writer, "# stemlab molecule script")?;
    for (index, atom) in molecule.atoms.iter().enumerate() {
        writeln!(
            writer,
            "atom {} {} {}",
            atom.element.symbol(),
            atom.position[0],
            atom.position[1]
        )?;
        if index > 0 && molecule.has_bond(index - 1, index) {
            writeln!(writer, "bond")?;
        }
    }
    for bond in &molecule.bonds {
        if bond.j != bond.i + 1 {
            writeln!(writer, "# bond {} {}", bond.i, bond.j)?;
        }
    }
    Ok(())
}
