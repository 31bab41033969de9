use std::io::Write;

use anyhow::{Context, Result, bail};

use stemlab::io::write_json;
use stemlab::playground::{self, Example, Language, RunOutput, find_example};

use super::{as_refs, resolve_outputs, write_substeps};
use crate::cli::RunArgs;
use crate::display::{Context as DisplayContext, Progress, print_run_summary};
use crate::io::{Input, Output, OutputFormat, OutputSpec, infer_language, stdin_is_tty};

const TOTAL_STEPS: u8 = 3;

const FORMATS: &[OutputFormat] = &[OutputFormat::Text, OutputFormat::Json];

pub fn run_playground(args: RunArgs, ctx: DisplayContext) -> Result<()> {
    if args.example.is_none() && args.io.input.is_none() && stdin_is_tty() {
        bail!(
            "No source given and stdin is a terminal.\n\nUsage: stemlab run -i <FILE>, --example <NAME>, or pipe source via stdin."
        );
    }

    let output_specs = resolve_outputs(&args.io.out, OutputFormat::Text, FORMATS)?;

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Loading source");
    let (source, language, origin) = load_source(&args)?;
    let load_substeps = vec![
        format!("{} ({})", origin, language),
        format!("{} line(s)", source.lines().count()),
    ];
    progress.complete_step("Loading source", &as_refs(&load_substeps));

    progress.step("Running");
    let output = playground::run(&source, language);
    let run_substeps = vec![format!("{} output line(s)", output.lines.len())];
    progress.complete_step("Running", &as_refs(&run_substeps));

    if ctx.interactive {
        print_run_summary(&output);
    }

    progress.step("Writing output");
    write_outputs(&output, &output_specs)?;
    progress.complete_step("Writing output", &as_refs(&write_substeps(&output_specs)));

    progress.finish();

    Ok(())
}

fn load_source(args: &RunArgs) -> Result<(String, Language, String)> {
    let requested: Option<Language> = args.language.map(Into::into);

    if let Some(key) = &args.example {
        let (language, example) = find_any_example(requested, key)?;
        return Ok((
            example.code.to_string(),
            language,
            format!("Example '{}'", example.title),
        ));
    }

    let path = args.io.input.as_deref();
    let language = requested
        .or_else(|| path.and_then(infer_language))
        .unwrap_or_default();
    let origin = match path {
        Some(p) => format!("Read {}", p.display()),
        None => "Read stdin".to_string(),
    };
    Ok((Input::open(path)?.read_text()?, language, origin))
}

fn find_any_example(
    language: Option<Language>,
    key: &str,
) -> Result<(Language, &'static Example)> {
    let candidates = match language {
        Some(lang) => vec![lang],
        None => Language::ALL.to_vec(),
    };
    candidates
        .into_iter()
        .find_map(|lang| find_example(lang, key).map(|example| (lang, example)))
        .with_context(|| format!("Unknown example '{}' (see `stemlab presets examples`)", key))
}

fn write_outputs(output: &RunOutput, specs: &[OutputSpec]) -> Result<()> {
    for spec in specs {
        let mut writer = Output::create(spec.path.as_deref())?;

        match spec.format {
            OutputFormat::Json => write_json(&mut writer, output).context("Failed to write JSON")?,
            OutputFormat::Text => writeln!(writer, "{}", output.text).context("Failed to write output")?,
            OutputFormat::Csv | OutputFormat::Script => {
                bail!("{} output is not available for playground runs", spec.format)
            }
        }

        writer.finish()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn examples_are_found_in_either_language() {
        let (language, example) = find_any_example(None, "Calculator").unwrap();
        assert_eq!(language, Language::JavaScript);
        assert_eq!(example.key, "calculator");
        assert!(find_any_example(Some(Language::Python), "calculator").is_err());
    }
}
