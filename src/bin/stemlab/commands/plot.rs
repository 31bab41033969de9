use std::io::Write;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::warn;

use stemlab::io::{Presets, csv, write_json};
use stemlab::math::{Function, Sample, Viewport, auto_scale, sample, segments, ticks};

use super::{as_refs, resolve_outputs, write_substeps};
use crate::cli::PlotArgs;
use crate::config::build_viewport;
use crate::display::{Context as DisplayContext, Progress, chart, print_plot_summary};
use crate::io::{Output, OutputFormat, OutputSpec};

const TOTAL_STEPS: u8 = 3;

const FORMATS: &[OutputFormat] = &[OutputFormat::Text, OutputFormat::Json, OutputFormat::Csv];

const CHART_WIDTH: usize = 72;
const CHART_HEIGHT: usize = 24;

#[derive(Serialize)]
pub struct Plot {
    pub function: Function,
    pub viewport: Viewport,
    pub samples: Vec<Sample>,
    pub segments: Vec<Vec<Sample>>,
    pub x_ticks: Vec<f64>,
    pub y_ticks: Vec<f64>,
}

pub fn run_plot(args: PlotArgs, presets: &Presets, ctx: DisplayContext) -> Result<()> {
    let source = match (&args.expression, &args.preset) {
        (Some(expr), _) => expr.clone(),
        (None, Some(name)) => match presets.function(name) {
            Some(preset) => preset.expression.clone(),
            None => bail!("Unknown preset function '{}'", name),
        },
        (None, None) => bail!("No expression given.\n\nUsage: stemlab plot <EXPRESSION> or --preset <NAME>."),
    };
    if args.resolution == 0 {
        bail!("--resolution must be at least 1");
    }

    let mut viewport = build_viewport(&args.viewport)?;
    let output_specs = resolve_outputs(&args.output.out, OutputFormat::Text, FORMATS)?;

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Parsing expression");
    let function = Function::compile(source.as_str())
        .with_context(|| format!("Invalid expression '{}'", source))?;
    let parse_substeps = vec![format!("y = {}", function)];
    progress.complete_step("Parsing expression", &as_refs(&parse_substeps));

    progress.step("Sampling function");
    let mut sample_substeps = Vec::new();
    if args.viewport.auto_scale {
        match auto_scale(&function, &viewport) {
            Some(scaled) => {
                viewport = scaled;
                sample_substeps.push(format!(
                    "Fit y-range to [{:.3}, {:.3}]",
                    viewport.y_min, viewport.y_max
                ));
            }
            None => warn!(
                expression = function.source(),
                "no finite values in the x-domain, keeping y-range"
            ),
        }
    }
    let plot = build_plot(function, viewport, args.resolution);
    sample_substeps.push(format!(
        "{} samples, {} drawable segment(s)",
        plot.samples.len(),
        plot.segments.len()
    ));
    progress.complete_step("Sampling function", &as_refs(&sample_substeps));

    if ctx.interactive {
        print_plot_summary(&plot.function, &plot.viewport, &plot.samples, &plot.segments);
    }

    progress.step("Writing output");
    write_outputs(&plot, &output_specs)?;
    progress.complete_step("Writing output", &as_refs(&write_substeps(&output_specs)));

    progress.finish();

    Ok(())
}

pub fn build_plot(function: Function, viewport: Viewport, resolution: usize) -> Plot {
    let samples = sample(&function, &viewport, resolution);
    let segments = segments(&samples, &viewport);
    Plot {
        x_ticks: ticks(viewport.x_min, viewport.x_max),
        y_ticks: ticks(viewport.y_min, viewport.y_max),
        function,
        viewport,
        samples,
        segments,
    }
}

fn write_outputs(plot: &Plot, specs: &[OutputSpec]) -> Result<()> {
    for spec in specs {
        let mut writer = Output::create(spec.path.as_deref())?;

        match spec.format {
            OutputFormat::Json => write_json(&mut writer, plot).context("Failed to write JSON")?,
            OutputFormat::Csv => {
                csv::write_samples(&mut writer, &plot.samples).context("Failed to write CSV")?
            }
            OutputFormat::Text => write_text(&mut writer, plot).context("Failed to write plot")?,
            OutputFormat::Script => bail!("Script output is only available for molecules"),
        }

        writer.finish()?;
    }

    Ok(())
}

fn write_text(out: &mut impl Write, plot: &Plot) -> std::io::Result<()> {
    let v = &plot.viewport;
    writeln!(out, "y = {}", plot.function.source())?;
    writeln!(
        out,
        "x: [{}, {}]  y: [{:.3}, {:.3}]",
        v.x_min, v.x_max, v.y_min, v.y_max
    )?;
    writeln!(out)?;
    for line in chart::render(&plot.segments, v, CHART_WIDTH, CHART_HEIGHT) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poles_split_the_curve() {
        let plot = build_plot(Function::parse("1/x"), Viewport::default(), 200);
        assert_eq!(plot.samples.len(), 201);
        assert_eq!(plot.segments.len(), 2);
        assert!(!plot.x_ticks.contains(&0.0));
    }
}
