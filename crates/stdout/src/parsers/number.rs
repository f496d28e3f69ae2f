// nom parser combinators
use nom::character::complete::{self, char, digit1};
use nom::combinator::{all_consuming, opt, recognize};
use nom::number::complete::double;
use nom::sequence::pair;
use nom::IResult;

/// Unsigned 32-bit integer making up the whole input, ignoring surrounding whitespace
pub(crate) fn whole_u32(i: &str) -> IResult<&str, u32> {
    all_consuming(complete::u32)(i.trim())
}

/// Unsigned 64-bit integer making up the whole input, ignoring surrounding whitespace
pub(crate) fn whole_u64(i: &str) -> IResult<&str, u64> {
    all_consuming(complete::u64)(i.trim())
}

/// Any floating point value making up the whole input
pub(crate) fn whole_f64(i: &str) -> IResult<&str, f64> {
    all_consuming(double)(i.trim())
}

/// Plain decimal value as written in scheduler reports, e.g. `12` or `12.34`
///
/// No sign, exponent or special values are accepted.
pub(crate) fn decimal(i: &str) -> IResult<&str, f64> {
    let (i, text) = recognize(pair(digit1, opt(pair(char('.'), digit1))))(i.trim_start())?;
    let (_, value) = double(text)?;
    Ok((i, value))
}

/// Plain decimal value making up the whole input
pub(crate) fn whole_decimal(i: &str) -> IResult<&str, f64> {
    all_consuming(decimal)(i.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_integers() {
        assert_eq!(whole_u64(" 1048576 "), Ok(("", 1048576)));
        assert_eq!(whole_u32("16"), Ok(("", 16)));
        assert!(whole_u32("16 node(s)").is_err());
        assert!(whole_u32("-16").is_err());
        assert!(whole_u64("1.5").is_err());
        assert!(whole_u64("").is_err());
    }

    #[test]
    fn whole_floats() {
        assert_eq!(whole_f64("1432.781"), Ok(("", 1432.781)));
        assert_eq!(whole_f64("1e3"), Ok(("", 1000.0)));
        assert!(whole_f64("12.3 ms").is_err());
    }

    #[test]
    fn decimals() {
        assert_eq!(decimal("12.34 ms"), Ok((" ms", 12.34)));
        assert_eq!(whole_decimal(" 0.00 "), Ok(("", 0.0)));
        assert_eq!(whole_decimal("7"), Ok(("", 7.0)));
        assert!(whole_decimal("1.2e3").is_err());
        assert!(whole_decimal("-1.0").is_err());
        assert!(whole_decimal("nan").is_err());
        assert!(whole_decimal("12.").is_err());
    }
}
