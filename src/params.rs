// src/params.rs
use std::path::PathBuf;

use crate::config::options::AnalysisOptions;
use crate::logging::LogSink;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// `-` means stdin.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" { Input::Stdin } else { Input::File(PathBuf::from(arg)) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub input: Input,                // saved stats page, or stdin
    pub log: LogSink,                // where log lines go
    pub verbosity: u8,               // -v count
    pub help: bool,                  // print usage then exit
    pub analysis: AnalysisOptions,
}

impl Params {
    pub fn new() -> Self {
        Self {
            input: Input::Stdin,
            log: LogSink::Stderr,
            verbosity: 0,
            help: false,
            analysis: AnalysisOptions::default(),
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
