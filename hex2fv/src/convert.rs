//! Converting hex tokens into delimited initializer lines.

use crate::{FormatError, Result, Rgb};
use std::{fmt, io::Write};

/// Trailing punctuation for a converted line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[must_use]
pub enum Delimiter {
    /// Separates entries inside an initializer list.
    Comma,
    /// Terminates the initializer list.
    Semicolon,
}

impl Delimiter {
    /// Delimiter for the zero-based `index` out of `count` lines. Only the last line gets a `;`.
    #[inline]
    pub fn for_position(index: usize, count: usize) -> Self {
        if index + 1 >= count {
            Self::Semicolon
        } else {
            Self::Comma
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Comma => ",",
            Self::Semicolon => ";",
        })
    }
}

/// Format a single line, e.g. `{0.263f, 0.259f, 0.278f, 1.f},`.
#[inline]
#[must_use]
pub fn format_line(rgb: Rgb, delimiter: Delimiter) -> String {
    format!("{}{delimiter}", rgb.triplet())
}

/// Parse the token at zero-based `index`, reporting failures with its 1-based position.
fn parse_token(index: usize, token: &str) -> std::result::Result<Rgb, FormatError> {
    Rgb::from_hex(token).map_err(|reason| FormatError::new(index + 1, token, reason))
}

/// Convert each hex token and write its line to `writer` as soon as it's parsed.
///
/// Stops at the first malformed token. Lines for the tokens before it have already been written,
/// nothing is written for it or anything after it. Returns the number of lines written.
///
/// # Errors
///
/// Returns [`Error::Format`](crate::Error::Format) for the first malformed token, or
/// [`Error::Io`](crate::Error::Io) if `writer` fails.
pub fn convert<I, S, W>(tokens: I, mut writer: W) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    I::IntoIter: ExactSizeIterator,
    S: AsRef<str>,
    W: Write,
{
    let tokens = tokens.into_iter();
    let count = tokens.len();
    for (index, token) in tokens.enumerate() {
        let token = token.as_ref();
        let rgb = parse_token(index, token)?;
        writeln!(
            writer,
            "{}",
            format_line(rgb, Delimiter::for_position(index, count))
        )?;
        tracing::debug!(position = index + 1, token, ?rgb, "converted");
    }
    writer.flush()?;
    tracing::debug!(count, "finished converting");
    Ok(count)
}

/// Convert every hex token into its line without writing anything.
///
/// # Errors
///
/// Returns [`Error::Format`](crate::Error::Format) for the first malformed token.
pub fn convert_to_lines<I, S>(tokens: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    I::IntoIter: ExactSizeIterator,
    S: AsRef<str>,
{
    let tokens = tokens.into_iter();
    let count = tokens.len();
    tokens
        .enumerate()
        .map(|(index, token)| -> Result<String> {
            let rgb = parse_token(index, token.as_ref())?;
            Ok(format_line(rgb, Delimiter::for_position(index, count)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, HexError};

    const PALETTE: [&str; 6] = ["434247", "5c5a66", "febc68", "fcdb8c", "1f9589", "41c0b5"];

    fn convert_to_string(tokens: &[&str]) -> (Result<usize>, String) {
        let mut output = Vec::new();
        let result = convert(tokens.iter(), &mut output);
        let output = String::from_utf8(output).expect("valid utf8 output");
        (result, output)
    }

    #[test]
    fn delimiter() {
        assert_eq!(Delimiter::for_position(0, 1), Delimiter::Semicolon);
        assert_eq!(Delimiter::for_position(0, 3), Delimiter::Comma);
        assert_eq!(Delimiter::for_position(1, 3), Delimiter::Comma);
        assert_eq!(Delimiter::for_position(2, 3), Delimiter::Semicolon);
        assert_eq!(Delimiter::Comma.to_string(), ",");
        assert_eq!(Delimiter::Semicolon.to_string(), ";");
    }

    #[test]
    fn format_lines() {
        assert_eq!(
            format_line(Rgb::new(0, 0, 0), Delimiter::Comma),
            "{0.000f, 0.000f, 0.000f, 1.f},"
        );
        assert_eq!(
            format_line(Rgb::new(255, 255, 255), Delimiter::Semicolon),
            "{1.000f, 1.000f, 1.000f, 1.f};"
        );
    }

    #[test]
    fn convert_palette() {
        let (result, output) = convert_to_string(&PALETTE);
        assert_eq!(result.expect("valid conversion"), 6);
        assert_eq!(
            output,
            "{0.263f, 0.259f, 0.278f, 1.f},\n\
             {0.361f, 0.353f, 0.400f, 1.f},\n\
             {0.996f, 0.737f, 0.408f, 1.f},\n\
             {0.988f, 0.859f, 0.549f, 1.f},\n\
             {0.122f, 0.584f, 0.537f, 1.f},\n\
             {0.255f, 0.753f, 0.710f, 1.f};\n"
        );
    }

    #[test]
    fn convert_empty() {
        let (result, output) = convert_to_string(&[]);
        assert_eq!(result.expect("valid conversion"), 0);
        assert!(output.is_empty());
    }

    #[test]
    fn convert_single() {
        let (result, output) = convert_to_string(&["ffffff"]);
        assert_eq!(result.expect("valid conversion"), 1);
        assert_eq!(output, "{1.000f, 1.000f, 1.000f, 1.f};\n");
    }

    #[test]
    fn convert_ignores_case() {
        let lower = convert_to_lines(["febc68", "41c0b5"]).expect("valid conversion");
        let upper = convert_to_lines(["FEBC68", "41C0B5"]).expect("valid conversion");
        assert_eq!(lower, upper);
    }

    #[test]
    fn convert_stops_at_bad_length() {
        let (result, output) = convert_to_string(&["434247", "43424", "5c5a66"]);
        match result {
            Err(Error::Format(err)) => {
                assert_eq!(err, FormatError::new(2, "43424", HexError::Length(5)));
                assert_eq!(
                    err.to_string(),
                    "expected 6 hex digits for arg #2: \"43424\", found 5 characters"
                );
            }
            other => panic!("expected a format error, got {other:?}"),
        }
        assert_eq!(output, "{0.263f, 0.259f, 0.278f, 1.f},\n");
    }

    #[test]
    fn convert_stops_at_non_hex() {
        let (result, output) = convert_to_string(&["zz0000", "434247"]);
        match result {
            Err(Error::Format(err)) => {
                assert_eq!(err.position, 1);
                assert_eq!(err.token, "zz0000");
                assert_eq!(err.reason, HexError::NonHex('z'));
            }
            other => panic!("expected a format error, got {other:?}"),
        }
        assert!(output.is_empty());
    }

    #[test]
    fn convert_to_lines_delimits() {
        let lines = convert_to_lines(PALETTE).expect("valid conversion");
        assert_eq!(lines.len(), PALETTE.len());
        let (last, rest) = lines.split_last().expect("non-empty lines");
        assert!(rest.iter().all(|line| line.ends_with("1.f},")));
        assert!(last.ends_with("1.f};"));
    }

    #[test]
    fn convert_to_lines_error() {
        let err = convert_to_lines(vec![String::from("434247"), String::from("#fffff")])
            .expect_err("invalid token");
        assert!(matches!(
            err,
            Error::Format(FormatError { position: 2, reason: HexError::NonHex('#'), .. })
        ));
    }
}
