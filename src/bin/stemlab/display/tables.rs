use std::io::{self, Write};

use stemlab::bio::{PatternMatch, SequenceAnalysis};
use stemlab::chem::Formula;
use stemlab::math::{Function, Sample, Viewport};
use stemlab::physics::{FlightSummary, Launch, PlaybackStats};
use stemlab::playground::RunOutput;
use stemlab::{Molecule, Nucleotide};

use crate::util::text::{preview, truncate};

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

const MAX_ROWS: usize = 15;

pub fn print_sequence_summary(name: Option<&str>, analysis: &SequenceAnalysis) {
    let mut out = io::stderr().lock();

    let title = match name {
        Some(name) => format!("Sequence: {}", name),
        None => "Sequence".to_string(),
    };
    let rows = [
        ("Length", format!("{} bp", analysis.length)),
        ("GC Content", format!("{:.1}%", analysis.gc_content)),
        ("Sequence", preview(&analysis.sequence.to_string(), 30)),
        ("Complement", preview(&analysis.complement.to_string(), 30)),
        ("Repeats", analysis.patterns.len().to_string()),
    ];
    print_kv_table(&mut out, &title, &rows);
}

pub fn print_composition(analysis: &SequenceAnalysis) {
    let mut out = io::stderr().lock();

    let data: Vec<(String, usize)> = Nucleotide::ALL
        .iter()
        .map(|&base| (base.to_string(), analysis.counts.get(base)))
        .collect();
    print_distribution_table(&mut out, "Base Composition", "Base", &data, analysis.length);
}

pub fn print_patterns(patterns: &[PatternMatch]) {
    if patterns.is_empty() {
        return;
    }
    let mut out = io::stderr().lock();

    let rows: Vec<[String; 3]> = patterns
        .iter()
        .map(|p| {
            [
                p.pattern.clone(),
                p.positions[0].to_string(),
                p.positions[1].to_string(),
            ]
        })
        .collect();
    print_grid(
        &mut out,
        "Repeated Patterns",
        ["Pattern", "First", "Second"],
        &rows,
    );
}

pub fn print_molecule_summary(molecule: &Molecule, formula: &Formula) {
    let mut out = io::stderr().lock();

    let rows = [
        ("Formula", formula.to_string()),
        ("Weight", format!("{:.2} g/mol", formula.weight())),
        ("Atoms", molecule.atom_count().to_string()),
        ("Bonds", molecule.bond_count().to_string()),
    ];
    print_kv_table(&mut out, "Molecule Summary", &rows);
}

pub fn print_element_distribution(formula: &Formula) {
    let mut out = io::stderr().lock();

    let data: Vec<(String, usize)> = formula
        .counts()
        .iter()
        .map(|(el, n)| (format!("{} ({})", el.symbol(), el.name()), *n))
        .collect();
    let total = data.iter().map(|(_, n)| n).sum();
    print_distribution_table(&mut out, "Element Distribution", "Element", &data, total);
}

pub fn print_flight_summary(launch: &Launch, summary: &FlightSummary) {
    let mut out = io::stderr().lock();

    let rows = [
        ("Initial Speed", format!("{} m/s", launch.speed())),
        ("Launch Angle", format!("{}°", launch.angle_deg())),
        ("Gravity", format!("{} m/s²", launch.gravity())),
        ("Flight Time", format!("{:.2} s", summary.flight_time)),
        ("Max Height", format!("{:.2} m", summary.max_height)),
        ("Range", format!("{:.2} m", summary.range)),
    ];
    print_kv_table(&mut out, "Flight Summary", &rows);
}

pub fn print_playback_stats(stats: &PlaybackStats) {
    let mut out = io::stderr().lock();

    let rows = [
        ("Current Time", format!("{:.2} s", stats.current_time)),
        ("Flight Time", format!("{:.2} s", stats.flight_time)),
        ("Max Height", format!("{:.2} m", stats.max_height)),
        ("Range", format!("{:.2} m", stats.range)),
    ];
    print_kv_table(&mut out, "Playback", &rows);
}

pub fn print_plot_summary(
    function: &Function,
    viewport: &Viewport,
    samples: &[Sample],
    segments: &[Vec<Sample>],
) {
    let mut out = io::stderr().lock();

    let finite = samples.iter().filter(|s| s.y.is_finite()).count();
    let rows = [
        ("Function", format!("y = {}", function.source())),
        ("X Range", format!("[{}, {}]", viewport.x_min, viewport.x_max)),
        (
            "Y Range",
            format!("[{:.3}, {:.3}]", viewport.y_min, viewport.y_max),
        ),
        ("Samples", format!("{} ({} finite)", samples.len(), finite)),
        ("Segments", segments.len().to_string()),
    ];
    print_kv_table(&mut out, "Plot Summary", &rows);
}

pub fn print_run_summary(output: &RunOutput) {
    let mut out = io::stderr().lock();

    let rows = [
        ("Language", output.language.name().to_string()),
        ("Output Lines", output.lines.len().to_string()),
        (
            "Scan Time",
            format!("{:.2} ms", output.duration.as_secs_f64() * 1000.0),
        ),
    ];
    print_kv_table(&mut out, "Playground Run", &rows);
}

fn rule(left: &str, mid: &str, right: &str, widths: &[usize]) -> String {
    let cells: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{INDENT}{left}{}{right}", cells.join(mid))
}

fn print_title(out: &mut impl Write, title: &str) {
    let _ = writeln!(
        out,
        "{INDENT}┌─ {} ─┐",
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + 6);
    let widths = [key_w, val_w];

    print_title(out, title);
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐", &widths));
    let _ = writeln!(out, "{INDENT}│ {:<key_w$} │ {:>val_w$} │", "Metric", "Value");
    let _ = writeln!(out, "{}", rule("├", "┼", "┤", &widths));
    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{INDENT}│ {:<key_w$} │ {:>val_w$} │",
            truncate(key, key_w),
            truncate(val, val_w)
        );
    }
    let _ = writeln!(out, "{}", rule("└", "┴", "┘", &widths));
}

fn print_distribution_table(
    out: &mut impl Write,
    title: &str,
    label: &str,
    data: &[(String, usize)],
    total: usize,
) {
    let name_w = 14usize;
    let count_w = 6usize;
    let dist_w = SAFE_TABLE_WIDTH.saturating_sub(name_w + count_w + 8);
    let bar_w = dist_w.saturating_sub(8).min(20);
    let widths = [name_w, count_w, dist_w];

    print_title(out, title);
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐", &widths));
    let _ = writeln!(
        out,
        "{INDENT}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
        label, "Count", "Distribution"
    );
    let _ = writeln!(out, "{}", rule("├", "┼", "┤", &widths));

    for (name, count) in data.iter().take(MAX_ROWS) {
        let pct = percent(*count, total);
        let cell = format!("{}  {:>5.1}%", make_bar(pct, bar_w), pct);
        let _ = writeln!(
            out,
            "{INDENT}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
            truncate(name, name_w),
            count,
            cell
        );
    }
    if data.len() > MAX_ROWS {
        let _ = writeln!(
            out,
            "{INDENT}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
            "...",
            "...",
            format!("({} more)", data.len() - MAX_ROWS)
        );
    }

    let _ = writeln!(out, "{}", rule("└", "┴", "┘", &widths));
}

fn print_grid(out: &mut impl Write, title: &str, headers: [&str; 3], rows: &[[String; 3]]) {
    let first_w = SAFE_TABLE_WIDTH.saturating_sub(2 * 10 + 8);
    let num_w = 10usize;
    let widths = [first_w, num_w, num_w];

    print_title(out, title);
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐", &widths));
    let _ = writeln!(
        out,
        "{INDENT}│ {:<first_w$} │ {:>num_w$} │ {:>num_w$} │",
        headers[0], headers[1], headers[2]
    );
    let _ = writeln!(out, "{}", rule("├", "┼", "┤", &widths));
    for [a, b, c] in rows.iter().take(MAX_ROWS) {
        let _ = writeln!(
            out,
            "{INDENT}│ {:<first_w$} │ {:>num_w$} │ {:>num_w$} │",
            truncate(a, first_w),
            b,
            c
        );
    }
    let _ = writeln!(out, "{}", rule("└", "┴", "┘", &widths));
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

fn make_bar(pct: f64, width: usize) -> String {
    let filled = ((pct / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>)) -> String {
        let mut buf = Vec::new();
        f(&mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn bar_is_proportional() {
        assert_eq!(make_bar(50.0, 10), "█████░░░░░");
        assert_eq!(make_bar(0.0, 4), "░░░░");
        assert_eq!(make_bar(120.0, 4), "████");
    }

    #[test]
    fn kv_rows_have_equal_width() {
        let text = render(|out| {
            print_kv_table(
                out,
                "Summary",
                &[("Length", "12 bp".into()), ("GC Content", "50.0%".into())],
            )
        });
        let widths: Vec<usize> = text.lines().skip(1).map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{text}");
        assert!(text.contains("12 bp"));
    }

    #[test]
    fn distribution_handles_empty_total() {
        let text = render(|out| {
            print_distribution_table(out, "Empty", "Base", &[("A".into(), 0)], 0)
        });
        assert!(text.contains("0.0%"));
    }
}
