// src/config/consts.rs

// Analysis
pub const DEFAULT_OUTLIERS: usize = 3;

// Positions without a rushing "Att" column
pub const REDUCED_POSITIONS: &[&str] = &["Tight End", "TE"];

// Canonical header labels on the stats page
pub const HDR_GAMES: &str = "G";
pub const HDR_ATTEMPTS: &str = "Att";
pub const HDR_RECEPTIONS: &str = "Rec";
pub const HDR_POINTS: &str = "FPts";

// Page selectors
pub const PAGEHEADER_CLASS: &str = "pageheader";
pub const STAT_CELL_CLASS: &str = "sort1";
pub const NAME_CELL_ALIGN: &str = "left";
pub const STAT_CELL_ALIGN: &str = "center";
pub const PAGEHEADER_SUFFIX: &str = " stats";

// Chart
pub const CHART_TITLE_PREFIX: &str = "Fantasy Football Production at ";
pub const CHART_X_LABEL: &str = "Touches";
pub const CHART_Y_LABEL: &str = "Fantasy Points";
pub const AXIS_BUFFER: f64 = 10.0;
pub const COLOR_OVER: &str = "green";
pub const COLOR_UNDER: &str = "red";
pub const COLOR_TOP: &str = "darkblue";
