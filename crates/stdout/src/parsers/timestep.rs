// crate modules
use crate::core::{ColumnMap, TimestepRecord};
use crate::error::{Error, Result};
use crate::parsers::number::{whole_f64, whole_u32, whole_u64};

// swtools modules
use swtools_utils::Time;

// nom
use nom::IResult;

/// Parse a step table row using the provided column layout
///
/// `line_number` is only used for error reporting. A status column beyond the
/// end of the row is not an error, but a malformed one is.
pub(crate) fn step_row(line_number: usize, i: &str, columns: &ColumnMap) -> Result<TimestepRecord> {
    let tokens: Vec<&str> = i.split_whitespace().collect();

    let step = column(&tokens, columns.step, line_number, whole_u32)?;
    let updates = column(&tokens, columns.updates, line_number, whole_u64)?;
    let duration = column(&tokens, columns.duration, line_number, whole_f64)?;

    let status = match columns.status {
        Some(index) if index < tokens.len() => {
            Some(column(&tokens, index, line_number, whole_u32)?)
        }
        _ => None,
    };

    Ok(TimestepRecord {
        step,
        updates,
        duration: Time::ms(duration),
        status,
    })
}

/// Run a parser over the token at `index`
fn column<'a, T>(
    tokens: &[&'a str],
    index: usize,
    line: usize,
    parser: fn(&'a str) -> IResult<&'a str, T>,
) -> Result<T> {
    let token = tokens.get(index).copied().unwrap_or_default();
    parser(token)
        .map(|(_, value)| value)
        .map_err(|_| Error::RowParseError {
            line,
            column: index,
            text: token.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW_V1: &str =
        "     5  3.1e-04  1.0  0.0  6.1e-05  43  46  128  0  0  0  0  15.250";
    const ROW_V2: &str =
        "     5  3.1e-04  1.0  0.0  6.1e-05  43  46  128  0  0  0  0  15.250  4  2.1";

    #[test]
    fn row_without_status() {
        let record = step_row(1, ROW_V1, &ColumnMap::V2).unwrap();
        assert_eq!(record.step, 5);
        assert_eq!(record.updates, 128);
        assert_eq!(record.duration, Time::ms(15.25));
        assert_eq!(record.status, None);
    }

    #[test]
    fn row_with_status() {
        let record = step_row(1, ROW_V2, &ColumnMap::V2).unwrap();
        assert_eq!(record.status, Some(4));

        // the legacy layout never looks at the status column
        let record = step_row(1, ROW_V2, &ColumnMap::V1).unwrap();
        assert_eq!(record.status, None);
    }

    #[test]
    fn short_row_is_an_error() {
        let err = step_row(42, "   5  3.1e-04  1.0", &ColumnMap::V2).unwrap_err();
        assert!(matches!(
            err,
            Error::RowParseError {
                line: 42,
                column: 7,
                ..
            }
        ));
    }

    #[test]
    fn non_numeric_step_is_an_error() {
        let err = step_row(3, "   Step  Time  a  b  c  d  e  Updates", &ColumnMap::V2).unwrap_err();
        assert!(matches!(err, Error::RowParseError { column: 0, .. }));
    }
}
