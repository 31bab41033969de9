mod dna;
mod molecule;
mod plot;
mod presets;
mod projectile;
mod run;

use dna::run_dna;
use molecule::run_molecule;
use plot::run_plot;
use presets::run_presets;
use projectile::run_projectile;
use run::run_playground;

use std::path::Path;

use anyhow::{Result, anyhow, bail};

use crate::cli::{Command, OutputOptions};
use crate::config::load_catalog;
use crate::display::Context;
use crate::io::{OutputFormat, OutputSpec, infer_output_format};

pub fn dispatch(command: Command, presets: Option<&Path>, ctx: Context) -> Result<()> {
    let catalog = load_catalog(presets)?;

    match command {
        Command::Dna(args) => run_dna(args, &catalog, ctx),
        Command::Molecule(args) => run_molecule(args, &catalog, ctx),
        Command::Projectile(args) => run_projectile(args, ctx),
        Command::Plot(args) => run_plot(args, &catalog, ctx),
        Command::Run(args) => run_playground(args, ctx),
        Command::Presets(args) => run_presets(args, &catalog),
    }
}

/// Resolves `-o`/`--outfmt` into output specs, stdout with `default` when no
/// file is given. Formats outside `supported` are rejected.
fn resolve_outputs(
    opts: &OutputOptions,
    default: OutputFormat,
    supported: &[OutputFormat],
) -> Result<Vec<OutputSpec>> {
    let check = |format: OutputFormat| -> Result<OutputFormat> {
        if supported.contains(&format) {
            Ok(format)
        } else {
            bail!(
                "{} output is not available here (supported: {})",
                format,
                supported
                    .iter()
                    .map(|f| f.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        }
    };

    let Some((first, rest)) = opts.output.split_first() else {
        let format = check(opts.format.unwrap_or(default))?;
        return Ok(vec![OutputSpec { path: None, format }]);
    };

    let mut specs = Vec::with_capacity(opts.output.len());

    let first_format = match opts.format.or_else(|| infer_output_format(first)) {
        Some(fmt) => fmt,
        None => bail!(
            "Cannot infer format from '{}'. Use --outfmt to specify.",
            first.display()
        ),
    };
    specs.push(OutputSpec {
        path: Some(first.clone()),
        format: check(first_format)?,
    });

    for path in rest {
        let format = infer_output_format(path).ok_or_else(|| {
            anyhow!(
                "Cannot infer format from '{}'. Use explicit extension.",
                path.display()
            )
        })?;
        specs.push(OutputSpec {
            path: Some(path.clone()),
            format: check(format)?,
        });
    }

    Ok(specs)
}

fn write_substeps(specs: &[OutputSpec]) -> Vec<String> {
    specs
        .iter()
        .map(|spec| format!("Write {} → {}", spec.format, spec.target_name()))
        .collect()
}

fn as_refs(items: &[String]) -> Vec<&str> {
    items.iter().map(String::as_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const TABULAR: &[OutputFormat] = &[OutputFormat::Text, OutputFormat::Json, OutputFormat::Csv];

    fn opts(paths: &[&str], format: Option<OutputFormat>) -> OutputOptions {
        OutputOptions {
            output: paths.iter().map(PathBuf::from).collect(),
            format,
        }
    }

    #[test]
    fn stdout_uses_default_format() {
        let specs = resolve_outputs(&opts(&[], None), OutputFormat::Text, TABULAR).unwrap();
        assert_eq!(specs.len(), 1);
        assert!(specs[0].path.is_none());
        assert_eq!(specs[0].format, OutputFormat::Text);
    }

    #[test]
    fn outfmt_applies_to_first_file_only() {
        let specs = resolve_outputs(
            &opts(&["a.dat", "b.csv"], Some(OutputFormat::Json)),
            OutputFormat::Text,
            TABULAR,
        )
        .unwrap();
        assert_eq!(specs[0].format, OutputFormat::Json);
        assert_eq!(specs[1].format, OutputFormat::Csv);
    }

    #[test]
    fn unsupported_and_unknown_formats_fail() {
        assert!(
            resolve_outputs(&opts(&["m.mols"], None), OutputFormat::Text, TABULAR).is_err()
        );
        assert!(resolve_outputs(&opts(&["a.dat"], None), OutputFormat::Text, TABULAR).is_err());
    }
}
