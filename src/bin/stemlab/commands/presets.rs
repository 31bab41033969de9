use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use stemlab::io::{Presets, write_json};
use stemlab::playground::{Example, Language, examples};

use crate::cli::{PresetKind, PresetsArgs};
use crate::io::Output;
use crate::util::text::{preview, truncate};

#[derive(Serialize)]
struct Catalog<'a> {
    #[serde(flatten)]
    presets: &'a Presets,
    examples: Vec<ExampleEntry>,
}

#[derive(Serialize)]
struct ExampleEntry {
    language: Language,
    #[serde(flatten)]
    example: Example,
}

pub fn run_presets(args: PresetsArgs, presets: &Presets) -> Result<()> {
    let mut out = Output::create(None)?;

    if args.json {
        let catalog = Catalog {
            presets,
            examples: all_examples()
                .map(|(language, example)| ExampleEntry { language, example })
                .collect(),
        };
        write_json(&mut out, &catalog).context("Failed to write JSON")?;
    } else {
        write_listing(&mut out, presets, args.kind).context("Failed to write preset list")?;
    }

    out.finish()?;
    Ok(())
}

fn all_examples() -> impl Iterator<Item = (Language, Example)> {
    Language::ALL
        .into_iter()
        .flat_map(|lang| examples(lang).iter().map(move |e| (lang, *e)))
}

fn write_listing(
    out: &mut impl Write,
    presets: &Presets,
    kind: Option<PresetKind>,
) -> std::io::Result<()> {
    let wants = |k: PresetKind| kind.is_none_or(|only| only == k);

    if wants(PresetKind::Sequences) {
        writeln!(out, "Sequences:")?;
        for p in &presets.sequences {
            writeln!(out, "  {:<24} {}", truncate(&p.name, 24), preview(&p.sequence, 40))?;
        }
        writeln!(out)?;
    }

    if wants(PresetKind::Molecules) {
        writeln!(out, "Molecules:")?;
        for m in &presets.molecules {
            writeln!(
                out,
                "  {:<24} {:<8} {} atoms, {} bonds",
                truncate(&m.name, 24),
                m.label,
                m.atoms.len(),
                m.bonds.len()
            )?;
        }
        writeln!(out)?;
    }

    if wants(PresetKind::Functions) {
        writeln!(out, "Functions:")?;
        for f in &presets.functions {
            writeln!(out, "  {:<24} y = {}", truncate(&f.name, 24), f.expression)?;
        }
        writeln!(out)?;
    }

    if wants(PresetKind::Examples) {
        writeln!(out, "Examples:")?;
        for (language, e) in all_examples() {
            writeln!(
                out,
                "  {:<12} {:<11} {}",
                e.key,
                language.name(),
                e.description
            )?;
        }
        writeln!(out)?;
    }

    Ok(())
}
