// src/config/options.rs
use super::consts::DEFAULT_OUTLIERS;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// How many over/under performers to flag.
    pub outliers: usize,
    /// Replaces the label read from the page header.
    pub position: Option<String>,
    pub report: ReportOptions,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            outliers: DEFAULT_OUTLIERS,
            position: None,
            report: ReportOptions::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Players,
    Annotations,
    Fit,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Fit, Section::Players, Section::Annotations];

    pub fn parse(s: &str) -> Option<Vec<Self>> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Some(Self::ALL.to_vec()),
            "players" => Some(vec![Section::Players]),
            "annotations" => Some(vec![Section::Annotations]),
            "fit" => Some(vec![Section::Fit]),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    pub sections: Vec<Section>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            sections: Section::ALL.to_vec(),
        }
    }
}
