// nom parser combinators
use nom::bytes::complete::{tag, take_until};
use nom::IResult;

/// Text between the first `prefix` and the first `suffix` that follows it
///
/// The remaining input starts at the suffix.
pub(crate) fn between<'a>(i: &'a str, prefix: &str, suffix: &str) -> IResult<&'a str, &'a str> {
    let (i, _) = take_until(prefix)(i)?;
    let (i, _) = tag(prefix)(i)?;
    take_until(suffix)(i)
}

/// Trimmed value between delimiters, if the line holds both in order
pub(crate) fn delimited_value<'a>(i: &'a str, prefix: &str, suffix: &str) -> Option<&'a str> {
    between(i, prefix, suffix).ok().map(|(_, value)| value.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_between_delimiters() {
        let line = "[0000] [00000.1] main: Running on 1048576 gas particles";
        assert_eq!(
            delimited_value(line, "main: Running on", "gas"),
            Some("1048576")
        );
    }

    #[test]
    fn first_suffix_after_prefix_wins() {
        // non-greedy, the second "ms" is never reached
        let line = "drift: 12.34 ms hydro: 1.00 ms";
        assert_eq!(delimited_value(line, "drift:", "ms"), Some("12.34"));
        assert_eq!(delimited_value(line, "hydro:", "ms"), Some("1.00"));
    }

    #[test]
    fn suffix_before_prefix_is_no_match() {
        assert_eq!(delimited_value("ms before drift: 1.0", "drift:", "ms"), None);
    }

    #[test]
    fn missing_delimiters() {
        assert_eq!(delimited_value("nothing to see", "drift:", "ms"), None);
        assert!(between("drift: 1.0", "drift:", "ms").is_err());
    }

    #[test]
    fn remaining_input_starts_at_suffix() {
        assert_eq!(between("a: 1 ms tail", "a:", "ms"), Ok(("ms tail", " 1 ")));
    }
}
