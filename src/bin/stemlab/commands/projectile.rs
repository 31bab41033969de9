use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Serialize;

use stemlab::io::{csv, write_json};
use stemlab::physics::{FlightSummary, Launch, Playback, PlaybackStats, Tick, TrajectoryPoint};

use super::{as_refs, resolve_outputs, write_substeps};
use crate::cli::ProjectileArgs;
use crate::config::{build_frame_clock, build_launch};
use crate::display::{
    Context as DisplayContext, FlightBar, Progress, print_flight_summary, print_playback_stats,
};
use crate::io::{Output, OutputFormat, OutputSpec};

const FORMATS: &[OutputFormat] = &[OutputFormat::Text, OutputFormat::Json, OutputFormat::Csv];

/// Longest animation recorded frame by frame; about an hour at 30 fps.
const MAX_ANIMATION_FRAMES: f64 = 100_000.0;

#[derive(Serialize)]
struct Report<'a> {
    launch: &'a Launch,
    summary: FlightSummary,
    trajectory: &'a [TrajectoryPoint],
}

pub fn run_projectile(args: ProjectileArgs, ctx: DisplayContext) -> Result<()> {
    let launch = build_launch(&args.launch)?;
    let output_specs = resolve_outputs(&args.output.out, OutputFormat::Text, FORMATS)?;
    if args.playback.steps == 0 {
        bail!("--steps must be at least 1");
    }

    let total_steps = if args.playback.animate { 3 } else { 2 };
    let mut progress = Progress::new(ctx.interactive, total_steps);

    progress.step("Computing flight");
    let summary = launch.summary();
    let flight_substeps = vec![
        format!("Flight time {:.2} s", summary.flight_time),
        format!("Apex {:.2} m, range {:.2} m", summary.max_height, summary.range),
    ];
    progress.complete_step("Computing flight", &as_refs(&flight_substeps));

    if ctx.interactive {
        print_flight_summary(&launch, &summary);
    }

    let trajectory = if args.playback.animate {
        progress.step("Playing flight");
        let (points, stats) = animate(&args, launch, ctx.interactive)?;
        let play_substeps = vec![format!(
            "{} frames at {} fps",
            points.len(),
            args.playback.fps
        )];
        progress.complete_step("Playing flight", &as_refs(&play_substeps));
        if ctx.interactive {
            print_playback_stats(&stats);
        }
        points
    } else {
        launch.sample(args.playback.steps)
    };

    progress.step("Writing output");
    let report = Report {
        launch: &launch,
        summary,
        trajectory: &trajectory,
    };
    write_outputs(&report, &output_specs)?;
    progress.complete_step("Writing output", &as_refs(&write_substeps(&output_specs)));

    progress.finish();

    Ok(())
}

/// Drives a playback frame by frame. Frames are paced in real time only when
/// someone is watching.
fn animate(
    args: &ProjectileArgs,
    launch: Launch,
    realtime: bool,
) -> Result<(Vec<TrajectoryPoint>, PlaybackStats)> {
    let clock = build_frame_clock(&args.playback)?;
    let frame = Duration::from_secs_f64(1.0 / clock.frame_rate());

    let mut playback = Playback::new(launch);
    playback.start();

    let frames = playback.stats().flight_time * clock.frame_rate();
    if frames > MAX_ANIMATION_FRAMES {
        bail!(
            "Animation would need {frames:.0} frames (limit {MAX_ANIMATION_FRAMES}); \
             lower --fps or --speed, or drop --animate and use --steps"
        );
    }

    let bar = FlightBar::new(realtime, playback.stats().flight_time);
    let mut points = Vec::new();

    for elapsed in clock {
        match playback.tick(elapsed) {
            Tick::Frame { t, position } => {
                points.push(TrajectoryPoint {
                    t,
                    x: position[0],
                    y: position[1],
                });
                bar.update(t, position);
                if realtime {
                    thread::sleep(frame);
                }
            }
            Tick::Landed | Tick::Idle => break,
        }
    }
    bar.finish();

    Ok((points, *playback.stats()))
}

fn write_outputs(report: &Report<'_>, specs: &[OutputSpec]) -> Result<()> {
    for spec in specs {
        let mut writer = Output::create(spec.path.as_deref())?;

        match spec.format {
            OutputFormat::Json => write_json(&mut writer, report).context("Failed to write JSON")?,
            OutputFormat::Csv => csv::write_trajectory(&mut writer, report.trajectory)
                .context("Failed to write CSV")?,
            OutputFormat::Text => write_text(&mut writer, report).context("Failed to write report")?,
            OutputFormat::Script => bail!("Script output is only available for molecules"),
        }

        writer.finish()?;
    }

    Ok(())
}

fn write_text(out: &mut impl Write, report: &Report<'_>) -> std::io::Result<()> {
    let launch = report.launch;
    let summary = &report.summary;

    writeln!(
        out,
        "Launch:       {} m/s at {}° (g = {} m/s²)",
        launch.speed(),
        launch.angle_deg(),
        launch.gravity()
    )?;
    writeln!(out, "Flight time:  {:.2} s", summary.flight_time)?;
    writeln!(out, "Max height:   {:.2} m", summary.max_height)?;
    writeln!(out, "Range:        {:.2} m", summary.range)?;
    writeln!(out)?;
    writeln!(out, "{:>10} {:>12} {:>12}", "t (s)", "x (m)", "y (m)")?;
    for p in report.trajectory {
        writeln!(out, "{:>10.3} {:>12.3} {:>12.3}", p.t, p.x, p.y)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{GeneratedOutput, LaunchOptions, OutputOptions, PlaybackOptions};

    fn args(fps: f64) -> ProjectileArgs {
        args_with_speed(20.0, fps)
    }

    fn args_with_speed(speed: f64, fps: f64) -> ProjectileArgs {
        ProjectileArgs {
            launch: LaunchOptions {
                speed,
                angle: 60.0,
                gravity: 9.81,
            },
            playback: PlaybackOptions {
                steps: 10,
                animate: true,
                fps,
            },
            output: GeneratedOutput {
                out: OutputOptions {
                    output: Vec::new(),
                    format: None,
                },
                quiet: true,
            },
        }
    }

    #[test]
    fn animation_records_every_frame_until_landing() {
        let args = args(30.0);
        let launch = build_launch(&args.launch).unwrap();
        let (points, stats) = animate(&args, launch, false).unwrap();

        let flight_time = launch.summary().flight_time;
        let expected = (flight_time * 30.0).floor() as usize + 1;
        assert_eq!(points.len(), expected);
        assert_eq!(points[0].t, 0.0);
        assert!(points.iter().all(|p| p.t <= flight_time));
        assert_eq!(stats.current_time, flight_time);
    }

    #[test]
    fn oversized_animation_is_rejected() {
        let fast = args_with_speed(1e200, 30.0);
        let launch = build_launch(&fast.launch).unwrap();
        let err = animate(&fast, launch, false).unwrap_err();
        assert!(err.to_string().contains("frames"));

        let dense = args(1e12);
        let launch = build_launch(&dense.launch).unwrap();
        assert!(animate(&dense, launch, false).is_err());
    }
}
