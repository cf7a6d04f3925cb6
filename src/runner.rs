// src/runner.rs
use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;

use crate::{
    analysis::{self, ChartData, RankingResult, chart},
    config::options::AnalysisOptions,
    csv,
    decode::{self, Stride},
    error::{Error, Result},
    params::{Input, Params},
    records::{self, PlayerRecord},
    schema::PositionSchema,
    specs::playerstats::{self, PageCells},
};

/// Everything one page produces, stage by stage.
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    pub schema: PositionSchema,
    /// As assembled, before residuals.
    pub records: Vec<PlayerRecord>,
    pub ranking: RankingResult,
    pub chart: ChartData,
}

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub position: String,
    pub players: usize,
    pub top_scorer: String,
}

/// Schema → decode → assemble → rank, on already-extracted cells.
pub fn analyze_cells(page: &PageCells, opts: &AnalysisOptions) -> Result<Analysis> {
    let position = opts.position.as_deref().unwrap_or(&page.position);

    let schema = PositionSchema::resolve(position, &page.headers)?;
    let stride = Stride::from_headers(&page.headers)?;
    let fields = decode::decode_fields(&page.stats, &schema, stride, page.athletes())?;
    let names = decode::decode_names(&page.names)?;
    let records = records::assemble(&fields, &names, &schema)?;

    let ranking = analysis::rank(&records, opts.outliers)?;
    let chart = chart::chart_data(schema.position(), &ranking);

    Ok(Analysis { schema, records, ranking, chart })
}

pub fn analyze_html(doc: &str, opts: &AnalysisOptions) -> Result<Analysis> {
    let page = playerstats::extract(doc)?;
    analyze_cells(&page, opts)
}

/// Read the page named by `params`, analyze it and write the report to `out`.
pub fn run<W: Write>(params: &Params, out: &mut W) -> Result<RunSummary> {
    let doc = read_input(&params.input)?;
    let analysis = analyze_html(&doc, &params.analysis)?;

    csv::write_report(&mut *out, &analysis, &params.analysis.report)?;
    out.flush()?;

    Ok(RunSummary {
        position: s!(analysis.schema.position()),
        players: analysis.records.len(),
        top_scorer: analysis.ranking.top_scorer.name.clone(),
    })
}

fn read_input(input: &Input) -> Result<String> {
    match input {
        Input::Stdin => {
            let mut buf = s!();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| Error::Read { path: PathBuf::from("-"), source })?;
            Ok(buf)
        }
        Input::File(path) => fs::read_to_string(path)
            .map_err(|source| Error::Read { path: path.clone(), source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduced_page() -> PageCells {
        PageCells {
            position: s!("Tight End"),
            headers: cells!["Player", "G", "Rec", "FPts"],
            names: cells!["1. Travis Kelce", "2. Rob Gronkowski", "3. Zach Ertz"],
            stats: cells!["15", "83", "161.8", "14", "69", "160.4", "14", "74", "130.4"],
        }
    }

    #[test]
    fn cells_flow_through_every_stage() {
        let a = analyze_cells(&reduced_page(), &AnalysisOptions::default()).unwrap();
        assert_eq!(a.records.len(), 3);
        assert_eq!(a.records[2].name, "Zach Ertz");
        assert_eq!(a.ranking.top_scorer.name, "Travis Kelce");
        assert_eq!(a.chart.title, "Fantasy Football Production at Tight End");
        // 3 over + 3 under + top scorer
        assert_eq!(a.chart.annotations.len(), 7);
    }

    #[test]
    fn position_override_changes_schema() {
        let opts = AnalysisOptions { position: Some(s!("Wide Receiver")), ..Default::default() };
        let err = analyze_cells(&reduced_page(), &opts).unwrap_err();
        assert!(matches!(err, Error::Schema { field: "Att", .. }));
    }

    #[test]
    fn missing_file_is_read_error() {
        let mut params = Params::new();
        params.input = Input::File(PathBuf::from("does/not/exist.html"));
        let mut out = Vec::new();
        let err = run(&params, &mut out).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert!(out.is_empty());
    }
}
