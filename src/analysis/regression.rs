// src/analysis/regression.rs
use crate::error::{Error, Result};
use crate::records::PlayerRecord;

/// Ordinary least squares line `y ≈ intercept + slope·x`.
///
/// Fitted with an intercept column, so residuals always sum to ~0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearFit {
    pub intercept: f64,
    pub slope: f64,
    /// Share of variance in `y` explained by the line.
    pub r_squared: f64,
    /// Number of points fitted.
    pub n: usize,
}

impl LinearFit {
    /// Fits `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// * [`Error::InsufficientData`] - fewer than two points
    ///
    /// When every `x` is equal the slope is unidentifiable; the line falls
    /// back to the mean of `y` (slope 0), which gives the same residuals a
    /// pseudo-inverse solve would.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ff_scrape::analysis::LinearFit;
    /// let fit = LinearFit::from_points(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]).unwrap();
    /// assert!((fit.slope - 2.0).abs() < 1e-12);
    /// assert!((fit.intercept - 1.0).abs() < 1e-12);
    /// ```
    pub fn from_points(points: &[(f64, f64)]) -> Result<Self> {
        let n = points.len();
        if n < 2 {
            return Err(Error::InsufficientData { found: n });
        }
        let nf = n as f64;
        let x_mean = points.iter().map(|p| p.0).sum::<f64>() / nf;
        let y_mean = points.iter().map(|p| p.1).sum::<f64>() / nf;

        let (mut sxx, mut sxy, mut syy) = (0.0, 0.0, 0.0);
        for &(x, y) in points {
            let dx = x - x_mean;
            let dy = y - y_mean;
            sxx += dx * dx;
            sxy += dx * dy;
            syy += dy * dy;
        }

        let slope = if sxx > 0.0 { sxy / sxx } else { 0.0 };
        let intercept = y_mean - slope * x_mean;

        let ss_res = points
            .iter()
            .map(|&(x, y)| (y - (intercept + slope * x)).powi(2))
            .sum::<f64>();
        // a flat y is fitted perfectly by its mean
        let r_squared = if syy > 0.0 { 1.0 - ss_res / syy } else { 1.0 };

        Ok(Self { intercept, slope, r_squared, n })
    }

    /// Fits fantasy points against touches.
    pub fn for_records(records: &[PlayerRecord]) -> Result<Self> {
        let points: Vec<(f64, f64)> = records
            .iter()
            .map(|r| (f64::from(r.touches), r.points))
            .collect();
        let fit = Self::from_points(&points)?;
        log::info!(
            "fit n={} intercept={:.4} slope={:.4} r2={:.4}",
            fit.n, fit.intercept, fit.slope, fit.r_squared
        );
        Ok(fit)
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// `actual − predicted` for one record.
    pub fn residual(&self, record: &PlayerRecord) -> f64 {
        record.points - self.predict(f64::from(record.touches))
    }
}
