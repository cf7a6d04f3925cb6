// src/schema.rs
//! Which stat fields a position page carries, and where they sit.
//!
//! Running backs and receivers get the generic layout (`G`, `Att`, `Rec`,
//! `FPts`); tight ends get the reduced one without `Att`. The kind is
//! decided once here so nothing downstream branches on a missing column.

use crate::config::consts::{
    HDR_ATTEMPTS, HDR_GAMES, HDR_POINTS, HDR_RECEPTIONS, REDUCED_POSITIONS,
};
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatField {
    Games,
    Attempts,
    Receptions,
    Points,
}

impl StatField {
    /// Label of this field in the page's header row.
    pub const fn header(self) -> &'static str {
        match self {
            StatField::Games => HDR_GAMES,
            StatField::Attempts => HDR_ATTEMPTS,
            StatField::Receptions => HDR_RECEPTIONS,
            StatField::Points => HDR_POINTS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PositionKind {
    /// Carries a rushing attempts column.
    Generic,
    /// No attempts column (tight ends).
    Reduced,
}

impl PositionKind {
    pub fn for_label(label: &str) -> Self {
        let label = label.trim();
        if REDUCED_POSITIONS.iter().any(|p| p.eq_ignore_ascii_case(label)) {
            PositionKind::Reduced
        } else {
            PositionKind::Generic
        }
    }

    pub const fn fields(self) -> &'static [StatField] {
        match self {
            PositionKind::Generic => &[
                StatField::Games,
                StatField::Attempts,
                StatField::Receptions,
                StatField::Points,
            ],
            PositionKind::Reduced => &[StatField::Games, StatField::Receptions, StatField::Points],
        }
    }
}

/// Field set plus 1-based stat column for each field.
///
/// Column `c` means the field is the `c`-th stat cell of an athlete's row;
/// the name column is not counted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionSchema {
    kind: PositionKind,
    position: String,
    columns: Vec<(StatField, usize)>,
}

impl PositionSchema {
    /// Locate every required field in the page's header labels.
    ///
    /// `headers[0]` is the name column, so a label found at index `i` is
    /// stat column `i`. The first occurrence wins when a label repeats.
    pub fn resolve(position: &str, headers: &[String]) -> Result<Self> {
        let kind = PositionKind::for_label(position);
        let mut columns = Vec::with_capacity(kind.fields().len());

        for &field in kind.fields() {
            let column = headers
                .iter()
                .position(|h| h.trim() == field.header())
                .filter(|&i| i > 0)
                .ok_or_else(|| Error::Schema { position: s!(position), field: field.header() })?;
            columns.push((field, column));
        }

        log::debug!("schema {:?} for '{}': {:?}", kind, position, columns);
        Ok(Self { kind, position: s!(position), columns })
    }

    /// Build from explicit columns; every field of `kind` must be listed once.
    pub fn with_columns(kind: PositionKind, position: &str, columns: &[(StatField, usize)]) -> Result<Self> {
        let mut ordered = Vec::with_capacity(kind.fields().len());
        for &field in kind.fields() {
            let column = columns
                .iter()
                .find(|(f, c)| *f == field && *c > 0)
                .map(|&(_, c)| c)
                .ok_or_else(|| Error::Schema { position: s!(position), field: field.header() })?;
            ordered.push((field, column));
        }
        Ok(Self { kind, position: s!(position), columns: ordered })
    }

    pub fn kind(&self) -> PositionKind {
        self.kind
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    /// Fields in canonical order with their 1-based columns.
    pub fn columns(&self) -> &[(StatField, usize)] {
        &self.columns
    }

    pub fn column(&self, field: StatField) -> Option<usize> {
        self.columns.iter().find(|(f, _)| *f == field).map(|&(_, c)| c)
    }

    pub fn has(&self, field: StatField) -> bool {
        self.column(field).is_some()
    }
}
