//! Comma-separated exports of computed results.
//!
//! Values that have no finite number (gaps in a plot) are written as empty
//! fields so that spreadsheet tools treat them as missing.

use std::io::Write;

use super::error::Error;
use crate::bio::SequenceAnalysis;
use crate::math::Sample;
use crate::model::molecule::Molecule;
use crate::model::types::Nucleotide;
use crate::physics::TrajectoryPoint;

fn field(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else {
        String::new()
    }
}

pub fn write_trajectory<W: Write>(mut writer: W, points: &[TrajectoryPoint]) -> Result<(), Error> {
    writeln!(writer, "t,x,y")?;
    for p in points {
        writeln!(writer, "{},{},{}", field(p.t), field(p.x), field(p.y))?;
    }
    Ok(())
}

pub fn write_samples<W: Write>(mut writer: W, samples: &[Sample]) -> Result<(), Error> {
    writeln!(writer, "x,y")?;
    for s in samples {
        writeln!(writer, "{},{}", field(s.x), field(s.y))?;
    }
    Ok(())
}

/// One row per base with its count and percentage.
pub fn write_composition<W: Write>(
    mut writer: W,
    analysis: &SequenceAnalysis,
) -> Result<(), Error> {
    writeln!(writer, "base,count,percent")?;
    for base in Nucleotide::ALL {
        writeln!(
            writer,
            "{},{},{}",
            base,
            analysis.counts.get(base),
            field(analysis.percentages.get(base))
        )?;
    }
    Ok(())
}

pub fn write_atoms<W: Write>(mut writer: W, molecule: &Molecule) -> Result<(), Error> {
    writeln!(writer, "index,element,x,y,weight")?;
    for (i, atom) in molecule.atoms.iter().enumerate() {
        writeln!(
            writer,
            "{},{},{},{},{}",
            i,
            atom.element.symbol(),
            field(atom.position[0]),
            field(atom.position[1]),
            atom.element.atomic_weight()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bio::analyze;
    use crate::math::{Function, Viewport, sample};

    fn to_string(write: impl FnOnce(&mut Vec<u8>) -> Result<(), Error>) -> String {
        let mut buf = Vec::new();
        write(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn samples_leave_gaps_empty() {
        let f = Function::parse("1/x");
        let domain = Viewport {
            x_min: -1.0,
            x_max: 1.0,
            ..Viewport::default()
        };
        let text = to_string(|w| write_samples(w, &sample(&f, &domain, 2)));
        assert_eq!(text, "x,y\n-1,-1\n0,\n1,1\n");
    }

    #[test]
    fn composition_rows_follow_base_order() {
        let analysis = analyze("AATG").unwrap();
        let text = to_string(|w| write_composition(w, &analysis));
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[0], "base,count,percent");
        assert_eq!(rows[1], "A,2,50");
        assert_eq!(rows[2], "T,1,25");
        assert_eq!(rows[3], "C,0,0");
        assert_eq!(rows[4], "G,1,25");
    }

    #[test]
    fn trajectory_has_header_and_rows() {
        let points = crate::physics::Launch::default().sample(4);
        let text = to_string(|w| write_trajectory(w, &points));
        assert_eq!(text.lines().count(), 6);
        assert!(text.starts_with("t,x,y\n0,0,0\n"));
    }
}
