// src/csv.rs
use std::io::{self, Write};

use crate::analysis::{Annotation, LinearFit};
use crate::config::options::{ReportOptions, Section};
use crate::records::PlayerRecord;
use crate::runner::Analysis;
use crate::schema::{PositionKind, StatField};

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/* ---------------- Report sections ---------------- */

pub fn player_headers(kind: PositionKind) -> Vec<String> {
    let mut h = vec![s!("Player"), s!(StatField::Games.header())];
    if kind == PositionKind::Generic {
        h.push(s!(StatField::Attempts.header()));
    }
    h.extend([
        s!(StatField::Receptions.header()),
        s!("Touches"),
        s!(StatField::Points.header()),
        s!("Residual"),
    ]);
    h
}

pub fn player_row(r: &PlayerRecord, kind: PositionKind) -> Vec<String> {
    let mut row = vec![r.name.clone(), r.games.to_string()];
    if kind == PositionKind::Generic {
        row.push(r.attempts.map(|a| a.to_string()).unwrap_or_default());
    }
    row.extend([
        r.receptions.to_string(),
        r.touches.to_string(),
        r.points.to_string(),
        r.residual.map(|v| format!("{v:.2}")).unwrap_or_default(),
    ]);
    row
}

pub fn annotation_headers() -> Vec<String> {
    vec![s!("Player"), s!("Touches"), s!("FPts"), s!("Residual"), s!("Color"), s!("Tag")]
}

pub fn annotation_row(a: &Annotation) -> Vec<String> {
    vec![
        a.name.clone(),
        a.touches.to_string(),
        a.points.to_string(),
        format!("{:.2}", a.residual),
        s!(a.color()),
        s!(a.mark.tag()),
    ]
}

pub fn fit_headers() -> Vec<String> {
    vec![s!("Intercept"), s!("Slope"), s!("R2"), s!("N")]
}

pub fn fit_row(fit: &LinearFit) -> Vec<String> {
    vec![
        format!("{:.4}", fit.intercept),
        format!("{:.4}", fit.slope),
        format!("{:.4}", fit.r_squared),
        fit.n.to_string(),
    ]
}

/// Write the requested sections, a blank line between them.
pub fn write_report<W: Write>(mut w: W, analysis: &Analysis, opts: &ReportOptions) -> io::Result<()> {
    let sep = opts.format.delim();
    let kind = analysis.schema.kind();

    for (i, section) in opts.sections.iter().enumerate() {
        if i > 0 { writeln!(w)?; }
        match section {
            Section::Fit => {
                if opts.include_headers { write_row(&mut w, &fit_headers(), sep)?; }
                write_row(&mut w, &fit_row(&analysis.ranking.fit), sep)?;
            }
            Section::Players => {
                if opts.include_headers { write_row(&mut w, &player_headers(kind), sep)?; }
                for r in &analysis.ranking.scored {
                    write_row(&mut w, &player_row(r, kind), sep)?;
                }
            }
            Section::Annotations => {
                if opts.include_headers { write_row(&mut w, &annotation_headers(), sep)?; }
                for a in &analysis.chart.annotations {
                    write_row(&mut w, &annotation_row(a), sep)?;
                }
            }
        }
    }
    Ok(())
}

/// Same as [`write_report`], into a `String`.
pub fn report_string(analysis: &Analysis, opts: &ReportOptions) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_report(&mut buf, analysis, opts);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
