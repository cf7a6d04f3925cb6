// src/decode.rs
//! Rebuild per-field columns from the flat stat-cell stream.
//!
//! The page renders each athlete's stat cells one after another, so the
//! stream is `row0[0..S], row1[0..S], …` and a field at stat column `c`
//! lives at `c-1, c-1+S, c-1+2S, …`.

use crate::error::{Error, Result};
use crate::schema::{PositionSchema, StatField};

/// Stat cells rendered per athlete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stride(usize);

impl Stride {
    pub fn new(cells: usize) -> Result<Self> {
        if cells == 0 {
            return Err(Error::Layout { field: "stride", column: 0, stride: 0 });
        }
        Ok(Self(cells))
    }

    /// Every header label except the leading name column is one stat cell.
    pub fn from_headers(headers: &[String]) -> Result<Self> {
        Self::new(headers.len().saturating_sub(1))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

/// Text values per field, each exactly `athletes` long.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedFields {
    athletes: usize,
    columns: Vec<(StatField, Vec<String>)>,
}

impl DecodedFields {
    pub fn athletes(&self) -> usize {
        self.athletes
    }

    pub fn get(&self, field: StatField) -> Option<&[String]> {
        self.columns
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatField, &[String])> {
        self.columns.iter().map(|(f, v)| (*f, v.as_slice()))
    }
}

pub fn decode_fields(
    stream: &[String],
    schema: &PositionSchema,
    stride: Stride,
    athletes: usize,
) -> Result<DecodedFields> {
    let s = stride.get();

    if stream.len() != athletes * s {
        log::debug!(
            "stream has {} cells, {} athletes x stride {} = {}",
            stream.len(), athletes, s, athletes * s
        );
    }

    let mut columns = Vec::with_capacity(schema.columns().len());
    for &(field, column) in schema.columns() {
        let offset = column - 1;
        if offset >= s {
            return Err(Error::Layout { field: field.header(), column, stride: s });
        }

        let values: Vec<String> = stream
            .iter()
            .skip(offset)
            .step_by(s)
            .take(athletes)
            .cloned()
            .collect();

        if values.len() < athletes {
            return Err(Error::StreamLength {
                field: field.header(),
                expected: athletes,
                found: values.len(),
            });
        }
        columns.push((field, values));
    }

    Ok(DecodedFields { athletes, columns })
}

/// "1. Travis Kelce" → "Travis Kelce". The leading rank token is dropped and
/// only the next two tokens are kept.
pub fn decode_name(raw: &str, row: usize) -> Result<String> {
    let mut tokens = raw.split_whitespace().skip(1);
    match (tokens.next(), tokens.next()) {
        (Some(first), Some(last)) => Ok(join!(first, " ", last)),
        _ => Err(Error::Parse { field: "Player", row, value: s!(raw) }),
    }
}

pub fn decode_names(raw: &[String]) -> Result<Vec<String>> {
    raw.iter()
        .enumerate()
        .map(|(row, cell)| decode_name(cell, row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::PositionKind;

    fn reduced() -> PositionSchema {
        PositionSchema::with_columns(
            PositionKind::Reduced,
            "Tight End",
            &[(StatField::Games, 1), (StatField::Receptions, 2), (StatField::Points, 3)],
        )
        .unwrap()
    }

    #[test]
    fn stride_excludes_name_column() {
        let headers = cells!["G", "Att", "Rec", "FPts"];
        assert_eq!(Stride::from_headers(&headers).unwrap().get(), 3);
        assert!(Stride::from_headers(&cells!["Player"]).is_err());
        assert!(Stride::new(0).is_err());
    }

    #[test]
    fn decodes_every_field_at_its_offset() {
        let stream = cells!["16", "50", "120", "15", "40", "90"];
        let stride = Stride::new(3).unwrap();
        let decoded = decode_fields(&stream, &reduced(), stride, 2).unwrap();

        assert_eq!(decoded.athletes(), 2);
        assert_eq!(decoded.get(StatField::Games).unwrap(), &cells!["16", "15"][..]);
        assert_eq!(decoded.get(StatField::Receptions).unwrap(), &cells!["50", "40"][..]);
        assert_eq!(decoded.get(StatField::Points).unwrap(), &cells!["120", "90"][..]);
        assert!(decoded.get(StatField::Attempts).is_none());
        assert!(decoded.iter().all(|(_, v)| v.len() == 2));
    }

    #[test]
    fn extra_trailing_cells_are_ignored() {
        let stream = cells!["16", "50", "120", "15", "40", "90", "14", "30"];
        let decoded = decode_fields(&stream, &reduced(), Stride::new(3).unwrap(), 2).unwrap();
        assert_eq!(decoded.get(StatField::Games).unwrap().len(), 2);
    }

    #[test]
    fn truncated_stream_is_stream_length_error() {
        // second athlete lost its points cell
        let stream = cells!["16", "50", "120", "15", "40"];
        let err = decode_fields(&stream, &reduced(), Stride::new(3).unwrap(), 2).unwrap_err();
        assert!(matches!(
            err,
            Error::StreamLength { field: "FPts", expected: 2, found: 1 }
        ));
    }

    #[test]
    fn column_past_stride_is_layout_error() {
        let stream = cells!["16", "50", "120", "15", "40", "90"];
        let err = decode_fields(&stream, &reduced(), Stride::new(2).unwrap(), 2).unwrap_err();
        assert!(matches!(err, Error::Layout { field: "FPts", column: 3, stride: 2 }));
    }

    #[test]
    fn names_drop_rank_and_extra_tokens() {
        let raw = cells!["1. Travis Kelce", "2 Zach  Ertz", "3. Odell Beckham Jr."];
        assert_eq!(
            decode_names(&raw).unwrap(),
            cells!["Travis Kelce", "Zach Ertz", "Odell Beckham"]
        );
    }

    #[test]
    fn short_name_cell_is_parse_error() {
        let err = decode_names(&cells!["1. Travis Kelce", "7. Gronk"]).unwrap_err();
        assert!(matches!(err, Error::Parse { field: "Player", row: 1, .. }));
    }
}
