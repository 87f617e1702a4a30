use std::path::Path;

use thiserror::Error;

use crate::model::SampleRow;
use crate::model::coerce;

#[derive(Debug, Error)]
pub enum SamplesError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing column {0:?}")]
    MissingColumn(&'static str),
}

/// Parse the a/b dataset format.
///
/// Row order is preserved. A missing `a`/`b` column is a load error;
/// numeric junk inside a present column coerces to NaN instead (the
/// exercise's acknowledged gap).
pub fn parse_samples(data: &[u8]) -> Result<Vec<SampleRow>, SamplesError> {
    let mut reader = csv::ReaderBuilder::new().from_reader(data);

    let headers = reader.headers()?.clone();
    let a_col = headers
        .iter()
        .position(|h| h == "a")
        .ok_or(SamplesError::MissingColumn("a"))?;
    let b_col = headers
        .iter()
        .position(|h| h == "b")
        .ok_or(SamplesError::MissingColumn("b"))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(SampleRow {
            a: coerce::parse_int(record.get(a_col).unwrap_or_default()),
            b: coerce::parse_float(record.get(b_col).unwrap_or_default()),
        });
    }
    Ok(rows)
}

pub fn load_samples(path: &Path) -> Result<Vec<SampleRow>, SamplesError> {
    let data = std::fs::read(path)?;
    parse_samples(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerces_text_fields_to_numbers() {
        let rows = match parse_samples(b"a,b\n3,1.5\n10,0.25\n") {
            Ok(rows) => rows,
            Err(e) => panic!("{e}"),
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].a, 3.0);
        assert_eq!(rows[0].b, 1.5);
    }

    #[test]
    fn junk_yields_nan_not_an_error() {
        let rows = match parse_samples(b"a,b\njunk,what\n") {
            Ok(rows) => rows,
            Err(e) => panic!("{e}"),
        };
        assert!(rows[0].a.is_nan());
        assert!(rows[0].b.is_nan());
    }

    #[test]
    fn missing_column_is_a_load_error() {
        assert!(matches!(
            parse_samples(b"a,c\n1,2\n"),
            Err(SamplesError::MissingColumn("b"))
        ));
    }
}
