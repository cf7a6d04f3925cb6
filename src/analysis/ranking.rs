// src/analysis/ranking.rs
use super::regression::LinearFit;
use crate::error::Result;
use crate::records::PlayerRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Performance {
    /// Scored more than the line predicts for the usage.
    Over,
    /// Scored less.
    Under,
}

impl Performance {
    pub fn tag(self) -> &'static str {
        match self { Performance::Over => "over", Performance::Under => "under" }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Outlier {
    /// Carries its residual.
    pub record: PlayerRecord,
    pub performance: Performance,
}

impl Outlier {
    pub fn residual(&self) -> f64 {
        self.record.residual.unwrap_or_default()
    }
}

/// Result of one analysis pass.
///
/// `top_outliers` and `bottom_outliers` each hold `min(K, N)` entries and are
/// not deduplicated against each other: with fewer than `2K` players the same
/// player can show up as both.
#[derive(Clone, Debug, PartialEq)]
pub struct RankingResult {
    pub fit: LinearFit,
    /// Input records with residuals filled, stream order.
    pub scored: Vec<PlayerRecord>,
    /// Highest points; the earliest such record on ties.
    pub top_scorer: PlayerRecord,
    /// Largest residual first; ties keep stream order.
    pub top_outliers: Vec<Outlier>,
    /// Most negative residual first.
    pub bottom_outliers: Vec<Outlier>,
}

/// Fit the line, score every record and pick the `k` biggest misses each way.
pub fn rank(records: &[PlayerRecord], k: usize) -> Result<RankingResult> {
    let fit = LinearFit::for_records(records)?;

    let residuals: Vec<f64> = records.iter().map(|r| fit.residual(r)).collect();
    let scored: Vec<PlayerRecord> = records
        .iter()
        .zip(&residuals)
        .map(|(r, &res)| r.with_residual(res))
        .collect();

    // stable: equal residuals keep their stream order
    let mut order: Vec<usize> = (0..scored.len()).collect();
    order.sort_by(|&a, &b| residuals[b].total_cmp(&residuals[a]));

    let take = k.min(scored.len());
    let outlier = |i: usize, performance| Outlier { record: scored[i].clone(), performance };

    let top_outliers: Vec<Outlier> = order[..take]
        .iter()
        .map(|&i| outlier(i, Performance::Over))
        .collect();
    let bottom_outliers: Vec<Outlier> = order[order.len() - take..]
        .iter()
        .rev()
        .map(|&i| outlier(i, Performance::Under))
        .collect();

    let top_ix = (1..scored.len())
        .fold(0, |best, i| if scored[i].points > scored[best].points { i } else { best });
    let top_scorer = scored[top_ix].clone();

    for o in top_outliers.iter().chain(&bottom_outliers) {
        log::debug!("{} {}: residual {:.2}", o.performance.tag(), o.record.name, o.residual());
    }
    log::debug!("top scorer {} ({:.1})", top_scorer.name, top_scorer.points);

    Ok(RankingResult { fit, scored, top_scorer, top_outliers, bottom_outliers })
}
