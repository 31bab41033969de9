use std::io::Write;

use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::warn;

use stemlab::bio::{SequenceAnalysis, analyze_sequence, random_sequence};
use stemlab::io::{Presets, csv, fasta, write_json};
use stemlab::{Nucleotide, Sequence};

use super::{as_refs, resolve_outputs, write_substeps};
use crate::cli::DnaArgs;
use crate::config::build_analysis_config;
use crate::display::{
    Context as DisplayContext, Progress, print_composition, print_patterns,
    print_sequence_summary,
};
use crate::io::{Input, Output, OutputFormat, OutputSpec, stdin_is_tty};
use crate::util::text::preview;

const TOTAL_STEPS: u8 = 3;

const FORMATS: &[OutputFormat] = &[OutputFormat::Text, OutputFormat::Json, OutputFormat::Csv];

#[derive(Serialize)]
struct Report {
    name: Option<String>,
    #[serde(flatten)]
    analysis: SequenceAnalysis,
}

pub fn run_dna(args: DnaArgs, presets: &Presets, ctx: DisplayContext) -> Result<()> {
    let from_input = args.sequence.is_none() && args.source.preset.is_none() && !args.source.random;
    if from_input && args.io.input.is_none() && stdin_is_tty() {
        bail!(
            "No sequence given and stdin is a terminal.\n\nUsage: stemlab dna <SEQUENCE>, --preset, --random, or pipe FASTA via stdin."
        );
    }

    let config = build_analysis_config(&args.patterns)?;
    let output_specs = resolve_outputs(&args.io.out, OutputFormat::Text, FORMATS)?;

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Loading sequence");
    let (records, load_substep) = load_records(&args, presets)?;
    progress.complete_step("Loading sequence", &[load_substep.as_str()]);

    progress.step("Analyzing sequence");
    let reports: Vec<Report> = records
        .into_iter()
        .filter_map(|(name, sequence)| {
            if sequence.is_empty() {
                warn!(record = name.as_deref().unwrap_or("input"), "no valid bases, skipped");
                return None;
            }
            Some(Report {
                name,
                analysis: analyze_sequence(sequence, &config),
            })
        })
        .collect();
    if reports.is_empty() {
        bail!("Input contains no valid bases (A, T, C, G)");
    }

    let analysis_substeps = vec![
        format!("Count bases in {} sequence(s)", reports.len()),
        "Compute GC-content and complement".to_string(),
        format!(
            "Search repeats of length {}-{}",
            config.min_pattern_len, config.max_pattern_len
        ),
    ];
    progress.complete_step("Analyzing sequence", &as_refs(&analysis_substeps));

    if ctx.interactive {
        for report in &reports {
            print_sequence_summary(report.name.as_deref(), &report.analysis);
            print_composition(&report.analysis);
            print_patterns(&report.analysis.patterns);
        }
    }

    progress.step("Writing output");
    write_outputs(&reports, &output_specs)?;
    progress.complete_step("Writing output", &as_refs(&write_substeps(&output_specs)));

    progress.finish();

    Ok(())
}

type Record = (Option<String>, Sequence);

fn load_records(args: &DnaArgs, presets: &Presets) -> Result<(Vec<Record>, String)> {
    if let Some(text) = &args.sequence {
        let substep = format!("Read {} characters from the command line", text.len());
        return Ok((vec![(None, Sequence::from_text(text))], substep));
    }

    if let Some(name) = &args.source.preset {
        let Some(preset) = presets.sequence(name) else {
            bail!("Unknown preset sequence '{}'", name);
        };
        let substep = format!("Use preset '{}'", preset.name);
        return Ok((
            vec![(Some(preset.name.clone()), Sequence::from_text(&preset.sequence))],
            substep,
        ));
    }

    if args.source.random {
        let length = args.source.length;
        let sequence = match args.source.seed {
            Some(seed) => random_sequence(&mut StdRng::seed_from_u64(seed), length),
            None => random_sequence(&mut rand::thread_rng(), length),
        };
        let substep = match args.source.seed {
            Some(seed) => format!("Generate {} random bases (seed {})", length, seed),
            None => format!("Generate {} random bases", length),
        };
        return Ok((vec![(Some("random".to_string()), sequence)], substep));
    }

    let input = Input::open(args.io.input.as_deref())?;
    let source = input.name().to_string();
    let records = fasta::read(input)
        .with_context(|| format!("Failed to read sequence input from {source}"))?;
    let substep = format!("Parse {} record(s) from {}", records.len(), source);
    Ok((
        records
            .into_iter()
            .map(|r| (r.name, Sequence::from_text(&r.text)))
            .collect(),
        substep,
    ))
}

fn write_outputs(reports: &[Report], specs: &[OutputSpec]) -> Result<()> {
    for spec in specs {
        let mut writer = Output::create(spec.path.as_deref())?;

        match spec.format {
            OutputFormat::Json => match reports {
                [single] => write_json(&mut writer, single),
                _ => write_json(&mut writer, reports),
            }
            .context("Failed to write JSON")?,
            OutputFormat::Csv => {
                let [single] = reports else {
                    bail!(
                        "CSV output holds one sequence but the input has {}; use JSON instead",
                        reports.len()
                    );
                };
                csv::write_composition(&mut writer, &single.analysis)
                    .context("Failed to write CSV")?;
            }
            OutputFormat::Text => {
                for report in reports {
                    write_text(&mut writer, report).context("Failed to write report")?;
                }
            }
            OutputFormat::Script => bail!("Script output is only available for molecules"),
        }

        writer.finish()?;
    }

    Ok(())
}

fn write_text(out: &mut impl Write, report: &Report) -> std::io::Result<()> {
    let a = &report.analysis;

    if let Some(name) = &report.name {
        writeln!(out, ">{}", name)?;
    }
    writeln!(out, "Sequence:    {}", preview(&a.sequence.to_string(), 60))?;
    writeln!(out, "Length:      {}", a.length)?;
    for base in Nucleotide::ALL {
        writeln!(
            out,
            "{}:           {} ({:.1}%)",
            base,
            a.counts.get(base),
            a.percentages.get(base)
        )?;
    }
    writeln!(out, "GC content:  {:.1}%", a.gc_content)?;
    writeln!(out, "Complement:  {}", preview(&a.complement.to_string(), 60))?;
    if a.patterns.is_empty() {
        writeln!(out, "Patterns:    none")?;
    } else {
        writeln!(out, "Patterns:")?;
        for p in &a.patterns {
            writeln!(
                out,
                "  {:<8} at {} and {}",
                p.pattern, p.positions[0], p.positions[1]
            )?;
        }
    }
    writeln!(out)?;
    Ok(())
}
