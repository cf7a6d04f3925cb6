// src/records.rs
use crate::decode::DecodedFields;
use crate::error::{Error, Result};
use crate::schema::{PositionKind, PositionSchema, StatField};

/// One athlete's row. Built once by [`assemble`]; analysis hands back
/// copies with `residual` filled instead of mutating these.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerRecord {
    pub name: String,
    pub games: u32,
    /// Only on generic-schema pages.
    pub attempts: Option<u32>,
    pub receptions: u32,
    pub points: f64,
    pub touches: u32,
    pub residual: Option<f64>,
}

impl PlayerRecord {
    pub fn with_residual(&self, residual: f64) -> Self {
        Self { residual: Some(residual), ..self.clone() }
    }
}

/// Zip decoded columns and names into records, stream order preserved.
///
/// Every column must have exactly one value per name; row `i` of each
/// column and `names[i]` describe the same athlete.
pub fn assemble(
    fields: &DecodedFields,
    names: &[String],
    schema: &PositionSchema,
) -> Result<Vec<PlayerRecord>> {
    let n = names.len();
    if fields.athletes() != n {
        return Err(Error::StreamLength { field: "Player", expected: fields.athletes(), found: n });
    }
    for (field, values) in fields.iter() {
        if values.len() != n {
            return Err(Error::StreamLength { field: field.header(), expected: n, found: values.len() });
        }
    }

    let games = column(fields, StatField::Games)?;
    let receptions_raw = column(fields, StatField::Receptions)?;
    let points = column(fields, StatField::Points)?;
    let attempts = match schema.kind() {
        PositionKind::Generic => Some(column(fields, StatField::Attempts)?),
        PositionKind::Reduced => None,
    };

    let mut out = Vec::with_capacity(n);
    for (row, name) in names.iter().enumerate() {
        let games = parse_count(&games[row], StatField::Games, row)?;
        let receptions = parse_count(&receptions_raw[row], StatField::Receptions, row)?;
        let points = parse_points(&points[row], row)?;
        let attempts = attempts
            .map(|col| parse_count(&col[row], StatField::Attempts, row))
            .transpose()?;

        let touches = attempts.unwrap_or(0).checked_add(receptions).ok_or_else(|| Error::Parse {
            field: StatField::Receptions.header(),
            row,
            value: s!(receptions_raw[row].trim()),
        })?;
        out.push(PlayerRecord {
            name: name.clone(),
            games,
            attempts,
            receptions,
            points,
            touches,
            residual: None,
        });
    }

    log::info!("assembled {} {} records", out.len(), schema.position());
    Ok(out)
}

/* ---------- helpers ---------- */

fn column(fields: &DecodedFields, field: StatField) -> Result<&[String]> {
    fields.get(field).ok_or(Error::StreamLength {
        field: field.header(),
        expected: fields.athletes(),
        found: 0,
    })
}

fn parse_count(cell: &str, field: StatField, row: usize) -> Result<u32> {
    let t = cell.trim();
    // thousands separators show up on season totals
    let digits = t.replace(',', "");
    digits
        .parse::<u32>()
        .map_err(|_| Error::Parse { field: field.header(), row, value: s!(t) })
}

fn parse_points(cell: &str, row: usize) -> Result<f64> {
    let t = cell.trim();
    match t.replace(',', "").parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::Parse { field: StatField::Points.header(), row, value: s!(t) }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{Stride, decode_fields};

    fn generic() -> PositionSchema {
        PositionSchema::with_columns(
            PositionKind::Generic,
            "Running Back",
            &[
                (StatField::Games, 1),
                (StatField::Attempts, 2),
                (StatField::Receptions, 3),
                (StatField::Points, 4),
            ],
        )
        .unwrap()
    }

    fn reduced() -> PositionSchema {
        PositionSchema::with_columns(
            PositionKind::Reduced,
            "Tight End",
            &[(StatField::Games, 1), (StatField::Receptions, 2), (StatField::Points, 3)],
        )
        .unwrap()
    }

    #[test]
    fn generic_touches_add_attempts() {
        let stream = cells!["16", "279", "64", "383.3", "15", "1,001", "20", "160.5"];
        let schema = generic();
        let decoded = decode_fields(&stream, &schema, Stride::new(4).unwrap(), 2).unwrap();
        let names = cells!["Todd Gurley", "Le'Veon Bell"];
        let recs = assemble(&decoded, &names, &schema).unwrap();

        assert_eq!(recs[0].attempts, Some(279));
        assert_eq!(recs[0].touches, 343);
        assert_eq!(recs[1].attempts, Some(1001));
        assert_eq!(recs[1].touches, 1021);
        assert!((recs[0].points - 383.3).abs() < 1e-9);
        assert!(recs.iter().all(|r| r.residual.is_none()));
    }

    #[test]
    fn reduced_touches_are_receptions() {
        let stream = cells!["16", "50", "120", "15", "40", "90"];
        let schema = reduced();
        let decoded = decode_fields(&stream, &schema, Stride::new(3).unwrap(), 2).unwrap();
        let names = cells!["Amari Cooper", "Davante Adams"];
        let recs = assemble(&decoded, &names, &schema).unwrap();

        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].name, "Amari Cooper");
        assert_eq!(recs[0].attempts, None);
        assert!(recs.iter().all(|r| r.touches == r.receptions));
    }

    #[test]
    fn dashes_in_points_are_rejected() {
        let stream = cells!["16", "50", "--"];
        let schema = reduced();
        let decoded = decode_fields(&stream, &schema, Stride::new(3).unwrap(), 1).unwrap();
        let err = assemble(&decoded, &cells!["Travis Kelce"], &schema).unwrap_err();
        assert!(matches!(err, Error::Parse { field: "FPts", row: 0, ref value } if value == "--"));
    }

    #[test]
    fn non_finite_points_are_rejected() {
        let stream = cells!["16", "50", "NaN"];
        let schema = reduced();
        let decoded = decode_fields(&stream, &schema, Stride::new(3).unwrap(), 1).unwrap();
        assert!(assemble(&decoded, &cells!["Travis Kelce"], &schema).is_err());
    }

    #[test]
    fn touches_overflow_is_parse_error() {
        let stream = cells!["16", "4294967295", "10", "50"];
        let schema = generic();
        let decoded = decode_fields(&stream, &schema, Stride::new(4).unwrap(), 1).unwrap();
        let err = assemble(&decoded, &cells!["Derrick Henry"], &schema).unwrap_err();
        assert!(matches!(err, Error::Parse { field: "Rec", row: 0, ref value } if value == "10"));
    }

    #[test]
    fn name_count_must_match_columns() {
        let stream = cells!["16", "50", "120", "15", "40", "90"];
        let schema = reduced();
        let decoded = decode_fields(&stream, &schema, Stride::new(3).unwrap(), 2).unwrap();
        let err = assemble(&decoded, &cells!["Amari Cooper"], &schema).unwrap_err();
        assert!(matches!(err, Error::StreamLength { field: "Player", expected: 2, found: 1 }));
    }

    #[test]
    fn with_residual_copies() {
        let rec = PlayerRecord {
            name: s!("Zach Ertz"),
            games: 14,
            attempts: None,
            receptions: 74,
            points: 130.4,
            touches: 74,
            residual: None,
        };
        let scored = rec.with_residual(-2.5);
        assert_eq!(scored.residual, Some(-2.5));
        assert_eq!(rec.residual, None);
    }
}
