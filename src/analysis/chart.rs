// src/analysis/chart.rs
//! Everything the plotter needs, precomputed: scatter points, axis ranges,
//! the fitted line and coloured labels. Rendering itself happens elsewhere.

use super::ranking::{Performance, RankingResult};
use super::regression::LinearFit;
use crate::config::consts::{
    AXIS_BUFFER, CHART_TITLE_PREFIX, CHART_X_LABEL, CHART_Y_LABEL, COLOR_OVER, COLOR_TOP,
    COLOR_UNDER,
};
use crate::records::PlayerRecord;

/// One scatter point.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphPoint {
    pub name: String,
    pub points: f64,
    pub touches: u32,
}

impl From<&PlayerRecord> for GraphPoint {
    fn from(r: &PlayerRecord) -> Self {
        Self { name: r.name.clone(), points: r.points, touches: r.touches }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Over,
    Under,
    TopScorer,
}

impl Mark {
    pub fn color(self) -> &'static str {
        match self {
            Mark::Over => COLOR_OVER,
            Mark::Under => COLOR_UNDER,
            Mark::TopScorer => COLOR_TOP,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Mark::Over => "over",
            Mark::Under => "under",
            Mark::TopScorer => "top",
        }
    }
}

impl From<Performance> for Mark {
    fn from(p: Performance) -> Self {
        match p {
            Performance::Over => Mark::Over,
            Performance::Under => Mark::Under,
        }
    }
}

/// A labelled, coloured point drawn over the scatter.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub name: String,
    pub touches: u32,
    pub points: f64,
    pub residual: f64,
    pub mark: Mark,
}

impl Annotation {
    fn new(record: &PlayerRecord, mark: Mark) -> Self {
        Self {
            name: record.name.clone(),
            touches: record.touches,
            points: record.points,
            residual: record.residual.unwrap_or_default(),
            mark,
        }
    }

    pub fn color(&self) -> &'static str {
        self.mark.color()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartData {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub points: Vec<GraphPoint>,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub fit: LinearFit,
    /// Over-performers, then under-performers, then the top scorer.
    pub annotations: Vec<Annotation>,
}

pub fn graph_points(records: &[PlayerRecord]) -> Vec<GraphPoint> {
    records.iter().map(GraphPoint::from).collect()
}

pub fn chart_data(position: &str, ranking: &RankingResult) -> ChartData {
    let points = graph_points(&ranking.scored);

    let x_range = padded_range(points.iter().map(|p| f64::from(p.touches)));
    let y_range = padded_range(points.iter().map(|p| p.points));

    let annotations = ranking
        .top_outliers
        .iter()
        .chain(&ranking.bottom_outliers)
        .map(|o| Annotation::new(&o.record, o.performance.into()))
        .chain(std::iter::once(Annotation::new(&ranking.top_scorer, Mark::TopScorer)))
        .collect();

    ChartData {
        title: join!(CHART_TITLE_PREFIX, position),
        x_label: CHART_X_LABEL,
        y_label: CHART_Y_LABEL,
        points,
        x_range,
        y_range,
        fit: ranking.fit,
        annotations,
    }
}

/// `(min − buffer, max + buffer)`; `(−buffer, buffer)` for no values.
fn padded_range<I: Iterator<Item = f64>>(values: I) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if lo > hi {
        return (-AXIS_BUFFER, AXIS_BUFFER);
    }
    (lo - AXIS_BUFFER, hi + AXIS_BUFFER)
}
