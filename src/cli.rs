// src/cli.rs
use std::io::{self, BufWriter};
use std::path::PathBuf;

use crate::config::options::{ExportFormat, Section};
use crate::error::{Error, Result};
use crate::logging::{self, LogSink};
use crate::params::{Input, Params};

pub const HELP: &str = include_str!("cli_help.txt");

pub fn run() -> Result<()> {
    let params = parse_args(std::env::args().skip(1))?;
    if params.help {
        eprintln!("{HELP}");
        return Ok(());
    }

    logging::init(params.log.clone(), logging::level_for_verbosity(params.verbosity))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = crate::runner::run(&params, &mut out)?;

    log::info!(
        "{}: {} players, top scorer {}",
        summary.position, summary.players, summary.top_scorer
    );
    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<Params>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::new();
    let mut sections: Vec<Section> = Vec::new();
    let mut input_seen = false;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--outliers" | "-k" => {
                let v = value(&mut args, &a)?;
                params.analysis.outliers = v
                    .parse()
                    .map_err(|_| usage(format!("Invalid outlier count: {}", v)))?;}
            "--format" => {
                let v = value(&mut args, &a)?;
                params.analysis.report.format = ExportFormat::parse(&v)
                    .ok_or_else(|| usage(format!("Unknown format: {}", v)))?;}
            "--no-headers" => params.analysis.report.include_headers = false,
            "--section" => {
                let v = value(&mut args, &a)?;
                let parsed = Section::parse(&v)
                    .ok_or_else(|| usage(format!("Unknown section: {}", v)))?;
                for s in parsed {
                    if !sections.contains(&s) { sections.push(s); }
                }}
            "--position" => params.analysis.position = Some(value(&mut args, &a)?),
            "--log" => params.log = LogSink::File(PathBuf::from(value(&mut args, &a)?)),
            v if v.len() > 1 && v.starts_with('-') && v[1..].bytes().all(|b| b == b'v') => {
                let n = u8::try_from(v.len() - 1).unwrap_or(u8::MAX);
                params.verbosity = params.verbosity.saturating_add(n);
            }
            "-h" | "--help" => params.help = true,
            other if other.starts_with('-') && other != "-" => {
                return Err(usage(format!("Unknown arg: {}", other)));
            }
            other => {
                if input_seen { return Err(usage(format!("Only one input page allowed, got extra: {}", other))); }
                params.input = Input::from_arg(other);
                input_seen = true;
            }
        }
    }

    if !sections.is_empty() {
        params.analysis.report.sections = sections;
    }
    Ok(params)
}

/* ---------- helpers ---------- */

fn value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String> {
    args.next().ok_or_else(|| usage(format!("Missing value for {}", flag)))
}

fn usage(msg: String) -> Error {
    Error::Usage(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Params> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_args_reads_stdin_with_defaults() {
        let p = parse(&[]).unwrap();
        assert_eq!(p.input, Input::Stdin);
        assert_eq!(p.analysis.outliers, 3);
        assert_eq!(p.log, LogSink::Stderr);
    }

    #[test]
    fn flags_and_input() {
        let p = parse(&[
            "pages/te.html", "--outliers", "5", "--format", "tsv", "--no-headers",
            "--section", "players", "--section", "fit", "--log", "out/run.log", "-vv",
        ])
        .unwrap();
        assert_eq!(p.input, Input::File(PathBuf::from("pages/te.html")));
        assert_eq!(p.analysis.outliers, 5);
        assert_eq!(p.analysis.report.format, ExportFormat::Tsv);
        assert!(!p.analysis.report.include_headers);
        assert_eq!(p.analysis.report.sections, vec![Section::Players, Section::Fit]);
        assert_eq!(p.log, LogSink::File(PathBuf::from("out/run.log")));
        assert_eq!(p.verbosity, 2);
    }

    #[test]
    fn verbosity_counts_every_v() {
        assert_eq!(parse(&["-vvv"]).unwrap().verbosity, 3);
        assert_eq!(parse(&["-v", "-vv"]).unwrap().verbosity, 3);
        assert!(matches!(parse(&["-vx"]), Err(Error::Usage(_))));
    }

    #[test]
    fn dash_is_stdin() {
        assert_eq!(parse(&["-"]).unwrap().input, Input::Stdin);
    }

    #[test]
    fn bad_args_are_usage_errors() {
        assert!(matches!(parse(&["--bogus"]), Err(Error::Usage(_))));
        assert!(matches!(parse(&["--outliers"]), Err(Error::Usage(_))));
        assert!(matches!(parse(&["--outliers", "many"]), Err(Error::Usage(_))));
        assert!(matches!(parse(&["a.html", "b.html"]), Err(Error::Usage(_))));
    }
}
