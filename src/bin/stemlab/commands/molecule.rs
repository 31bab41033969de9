use std::io::Write;

use anyhow::{Context, Result, bail};
use serde::Serialize;

use stemlab::chem::{self, Formula, MoleculeBuilder};
use stemlab::io::{Presets, csv, script, write_json};
use stemlab::{Bond, Molecule};

use super::{as_refs, resolve_outputs, write_substeps};
use crate::cli::MoleculeArgs;
use crate::display::{
    Context as DisplayContext, Progress, print_element_distribution, print_molecule_summary,
};
use crate::io::{Input, Output, OutputFormat, OutputSpec, stdin_is_tty};

const TOTAL_STEPS: u8 = 3;

const FORMATS: &[OutputFormat] = &[
    OutputFormat::Text,
    OutputFormat::Json,
    OutputFormat::Csv,
    OutputFormat::Script,
];

#[derive(Serialize)]
struct Summary<'a> {
    formula: String,
    molecular_weight: f64,
    atoms: Vec<AtomRow>,
    bonds: &'a [Bond],
}

#[derive(Serialize)]
struct AtomRow {
    element: &'static str,
    x: f64,
    y: f64,
    color: &'static str,
    radius: f64,
}

pub fn run_molecule(args: MoleculeArgs, presets: &Presets, ctx: DisplayContext) -> Result<()> {
    let read_script = args.io.input.is_some() || !stdin_is_tty();
    if args.preset.is_none() && !read_script {
        bail!(
            "No molecule script given and stdin is a terminal.\n\nUsage: stemlab molecule -i <SCRIPT>, --preset <NAME>, or pipe a script via stdin."
        );
    }

    let output_specs = resolve_outputs(&args.io.out, OutputFormat::Text, FORMATS)?;

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Building molecule");
    let mut builder = MoleculeBuilder::new();
    let mut build_substeps = Vec::new();

    if let Some(name) = &args.preset {
        let template = presets
            .molecule(name)
            .ok_or_else(|| chem::Error::UnknownPreset(name.clone()))?;
        builder
            .load(template)
            .with_context(|| format!("Failed to load preset '{}'", template.name))?;
        build_substeps.push(format!("Load preset '{}'", template.name));
    }

    if read_script {
        let input = Input::open(args.io.input.as_deref())?;
        script::apply(input, &mut builder, presets).context("Failed to run molecule script")?;
        build_substeps.push("Apply script commands".to_string());
    }

    if builder.molecule().is_empty() {
        bail!("The molecule has no atoms");
    }

    let formula = builder.formula();
    build_substeps.push(format!(
        "{} atoms, {} bonds",
        builder.molecule().atom_count(),
        builder.molecule().bond_count()
    ));
    progress.complete_step("Building molecule", &as_refs(&build_substeps));

    progress.step("Computing formula");
    let formula_substeps = vec![
        format!("Formula {}", formula),
        format!("Molecular weight {:.2} g/mol", formula.weight()),
    ];
    progress.complete_step("Computing formula", &as_refs(&formula_substeps));

    if ctx.interactive {
        print_molecule_summary(builder.molecule(), &formula);
        print_element_distribution(&formula);
    }

    progress.step("Writing output");
    write_outputs(builder.molecule(), &formula, &output_specs)?;
    progress.complete_step("Writing output", &as_refs(&write_substeps(&output_specs)));

    progress.finish();

    Ok(())
}

fn write_outputs(molecule: &Molecule, formula: &Formula, specs: &[OutputSpec]) -> Result<()> {
    for spec in specs {
        let mut writer = Output::create(spec.path.as_deref())?;

        match spec.format {
            OutputFormat::Json => {
                write_json(&mut writer, &summary(molecule, formula)).context("Failed to write JSON")?
            }
            OutputFormat::Csv => {
                csv::write_atoms(&mut writer, molecule).context("Failed to write CSV")?
            }
            OutputFormat::Script => {
                script::write(&mut writer, molecule).context("Failed to write molecule script")?
            }
            OutputFormat::Text => {
                write_text(&mut writer, molecule, formula).context("Failed to write report")?
            }
        }

        writer.finish()?;
    }

    Ok(())
}

fn summary<'a>(molecule: &'a Molecule, formula: &Formula) -> Summary<'a> {
    Summary {
        formula: formula.to_string(),
        molecular_weight: formula.weight(),
        atoms: molecule
            .atoms
            .iter()
            .map(|atom| AtomRow {
                element: atom.element.symbol(),
                x: atom.position[0],
                y: atom.position[1],
                color: atom.element.color(),
                radius: atom.element.radius(),
            })
            .collect(),
        bonds: &molecule.bonds,
    }
}

fn write_text(out: &mut impl Write, molecule: &Molecule, formula: &Formula) -> std::io::Result<()> {
    writeln!(out, "Formula:           {}", formula)?;
    writeln!(out, "Molecular weight:  {:.2} g/mol", formula.weight())?;
    writeln!(out, "Atoms:             {}", molecule.atom_count())?;
    writeln!(out, "Bonds:             {}", molecule.bond_count())?;
    writeln!(out)?;
    for (i, atom) in molecule.atoms.iter().enumerate() {
        writeln!(
            out,
            "  {:>3}  {:<2} {:>8.1} {:>8.1}",
            i,
            atom.element.symbol(),
            atom.position[0],
            atom.position[1]
        )?;
    }
    for bond in &molecule.bonds {
        writeln!(out, "  bond {} - {}", bond.i, bond.j)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stemlab::io::default_presets;

    #[test]
    fn summary_lists_every_atom() {
        let mut builder = MoleculeBuilder::new();
        builder
            .load(default_presets().molecule("Water").unwrap())
            .unwrap();
        let formula = builder.formula();
        let summary = summary(builder.molecule(), &formula);
        assert_eq!(summary.formula, "H2O");
        assert_eq!(summary.atoms.len(), 3);
        assert_eq!(summary.bonds.len(), 2);
        assert!((summary.molecular_weight - 18.015).abs() < 0.01);
    }
}
