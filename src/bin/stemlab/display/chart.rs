//! Character-cell rendering of plot segments for terminal output.

use stemlab::math::{Sample, Viewport};

const LABEL_WIDTH: usize = 10;

const CURVE: char = '•';

/// Draws `segments` in a `width` × `height` cell grid with y labels on the
/// left and the x-range underneath. Axes are drawn where zero is in view.
pub fn render(
    segments: &[Vec<Sample>],
    viewport: &Viewport,
    width: usize,
    height: usize,
) -> Vec<String> {
    let width = width.max(2);
    let height = height.max(2);
    let mut grid = vec![vec![' '; width]; height];

    let to_col = |x: f64| (x - viewport.x_min) / viewport.x_span() * (width - 1) as f64;
    let to_row = |y: f64| (viewport.y_max - y) / viewport.y_span() * (height - 1) as f64;

    let zero_col = to_col(0.0).round();
    let zero_row = to_row(0.0).round();
    let col_visible = (0.0..width as f64).contains(&zero_col);
    let row_visible = (0.0..height as f64).contains(&zero_row);

    if row_visible {
        grid[zero_row as usize].fill('─');
    }
    if col_visible {
        for (r, row) in grid.iter_mut().enumerate() {
            row[zero_col as usize] = if row_visible && r == zero_row as usize {
                '┼'
            } else {
                '│'
            };
        }
    }

    for segment in segments {
        for pair in segment.windows(2) {
            let (c0, r0) = (to_col(pair[0].x), to_row(pair[0].y));
            let (c1, r1) = (to_col(pair[1].x), to_row(pair[1].y));
            let steps = (c1 - c0).abs().max((r1 - r0).abs()).ceil().max(1.0) as usize;
            for k in 0..=steps {
                let f = k as f64 / steps as f64;
                let c = (c0 + (c1 - c0) * f).round();
                let r = (r0 + (r1 - r0) * f).round();
                if (0.0..width as f64).contains(&c) && (0.0..height as f64).contains(&r) {
                    grid[r as usize][c as usize] = CURVE;
                }
            }
        }
    }

    let mut lines: Vec<String> = grid
        .into_iter()
        .enumerate()
        .map(|(r, row)| {
            let label = if r == 0 {
                format_label(viewport.y_max)
            } else if r == height - 1 {
                format_label(viewport.y_min)
            } else {
                String::new()
            };
            let cells: String = row.into_iter().collect();
            format!("{label:>LABEL_WIDTH$} ┤{cells}")
        })
        .collect();

    let left = format_label(viewport.x_min);
    let right = format_label(viewport.x_max);
    let gap = (width + 1).saturating_sub(left.chars().count() + right.chars().count());
    lines.push(format!(
        "{:>LABEL_WIDTH$} {left}{}{right}",
        "",
        " ".repeat(gap)
    ));

    lines
}

fn format_label(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e9 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stemlab::math::{Function, sample, segments};

    fn plot(expr: &str, viewport: Viewport) -> Vec<String> {
        let f = Function::parse(expr);
        let samples = sample(&f, &viewport, 400);
        render(&segments(&samples, &viewport), &viewport, 41, 21)
    }

    #[test]
    fn axes_cross_at_origin() {
        let lines = plot("100", Viewport::default());
        assert_eq!(lines.len(), 22);
        let middle: Vec<char> = lines[10].chars().collect();
        assert!(middle.contains(&'┼'));
        assert!(lines[0].trim_start().starts_with("10 ┤"));
    }

    #[test]
    fn line_through_origin_marks_both_corners() {
        let lines = plot("x", Viewport::default());
        let top: Vec<char> = lines[0].chars().collect();
        let bottom: Vec<char> = lines[20].chars().collect();
        assert_eq!(*top.last().unwrap(), CURVE);
        assert_eq!(bottom[LABEL_WIDTH + 2], CURVE);
    }

    #[test]
    fn x_range_is_labelled() {
        let lines = plot("x", Viewport::default());
        let last = lines.last().unwrap();
        assert!(last.trim_start().starts_with("-10"));
        assert!(last.ends_with("10"));
    }
}
