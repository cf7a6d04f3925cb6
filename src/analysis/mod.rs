// src/analysis/mod.rs
//! Production-vs-usage analysis over assembled records.
//!
//! ```text
//! records → regression::LinearFit (points ≈ β0 + β1·touches)
//!        ↘  ranking::rank → residuals, over/under outliers, top scorer
//!                       ↘  chart::ChartData (what the plotter draws)
//! ```
//!
//! Everything here is a pure function of the record slice: running it twice
//! on the same input gives the same result, and the input is never touched.
pub mod chart;
pub mod ranking;
pub mod regression;

pub use chart::{Annotation, ChartData, GraphPoint, Mark};
pub use ranking::{Outlier, Performance, RankingResult, rank};
pub use regression::LinearFit;
