use std::{
    io::{self, BufRead},
    str::FromStr,
};

use tracing::debug;

use super::{ParseError, Point};

const COMMA: u8 = b',';

impl Point {
    /// Reads two coordinates from `reader` and assigns them to this point.
    ///
    /// The coordinates may be separated by whitespace (including newlines)
    /// and/or a single comma. Reading stops right after the second
    /// coordinate, so several points can be read from the same reader.
    ///
    /// # Errors
    /// On any [`ParseError`] the point keeps its previous coordinates.
    #[tracing::instrument(level = "trace", skip(reader))]
    pub fn input<R: BufRead + ?Sized>(&mut self, reader: &mut R) -> Result<(), ParseError> {
        match Self::read_from(reader) {
            Ok(point) => {
                *self = point;
                Ok(())
            }
            Err(e) => {
                debug!("Keeping {:?}: {}", self, e);
                Err(e)
            }
        }
    }

    /// Reads a fresh point from `reader`. See [`Point::input`] for the accepted form.
    pub fn read_from<R: BufRead + ?Sized>(reader: &mut R) -> Result<Point, ParseError> {
        let x = read_coordinate(reader, false)?.ok_or(ParseError::Exhausted { read: 0 })?;
        let y = read_coordinate(reader, true)?.ok_or(ParseError::Exhausted { read: 1 })?;

        let point = Point::new(x, y);
        debug!("Read point {:?}", point);
        Ok(point)
    }
}

impl FromStr for Point {
    type Err = ParseError;

    /// Parses a string holding exactly one point, surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = s.as_bytes();
        let point = Point::read_from(&mut bytes)?;

        let rest = String::from_utf8_lossy(bytes);
        let rest = rest.trim();
        if !rest.is_empty() {
            return Err(ParseError::TrailingInput {
                rest: rest.to_string(),
            });
        }

        Ok(point)
    }
}

/// Reads the next token and parses it into a finite `f64`.
/// Returns `None` if the reader is exhausted before a token starts.
fn read_coordinate<R: BufRead + ?Sized>(
    reader: &mut R,
    after_first: bool,
) -> Result<Option<f64>, ParseError> {
    let Some(token) = read_token(reader, after_first)? else {
        return Ok(None);
    };

    let value = token
        .parse::<f64>()
        .map_err(|source| ParseError::InvalidNumber {
            token: token.clone(),
            source,
        })?;

    if !value.is_finite() {
        return Err(ParseError::NotFinite { token });
    }

    Ok(Some(value))
}

/// Returns the next token of `reader`: a run of bytes which are neither
/// whitespace nor a comma.
///
/// If `skip_comma` is set, one comma in front of the token is skipped. Any
/// other comma at the start is returned as its own token so that it fails
/// to parse.
fn read_token<R: BufRead + ?Sized>(reader: &mut R, skip_comma: bool) -> io::Result<Option<String>> {
    let mut next = skip_while(reader, |byte| byte.is_ascii_whitespace())?;

    if skip_comma && next == Some(COMMA) {
        reader.consume(1);
        next = skip_while(reader, |byte| byte.is_ascii_whitespace())?;
    }

    let token = match next {
        None => return Ok(None),
        Some(COMMA) => {
            reader.consume(1);
            vec![COMMA]
        }
        Some(_) => take_while(reader, |byte| !byte.is_ascii_whitespace() && byte != COMMA)?,
    };

    Ok(Some(String::from_utf8_lossy(&token).into_owned()))
}

/// Consumes bytes as long as `skip` holds and returns the first byte which
/// doesn't, without consuming it.
fn skip_while<R: BufRead + ?Sized>(
    reader: &mut R,
    skip: impl Fn(u8) -> bool,
) -> io::Result<Option<u8>> {
    loop {
        let buffer = match reader.fill_buf() {
            Ok(buffer) => buffer,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        if buffer.is_empty() {
            return Ok(None);
        }

        match buffer.iter().position(|&byte| !skip(byte)) {
            Some(index) => {
                let byte = buffer[index];
                reader.consume(index);
                return Ok(Some(byte));
            }
            None => {
                let len = buffer.len();
                reader.consume(len);
            }
        }
    }
}

/// Consumes and returns bytes as long as `take` holds.
fn take_while<R: BufRead + ?Sized>(
    reader: &mut R,
    take: impl Fn(u8) -> bool,
) -> io::Result<Vec<u8>> {
    let mut taken = Vec::new();

    loop {
        let buffer = match reader.fill_buf() {
            Ok(buffer) => buffer,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        if buffer.is_empty() {
            return Ok(taken);
        }

        match buffer.iter().position(|&byte| !take(byte)) {
            Some(index) => {
                taken.extend_from_slice(&buffer[..index]);
                reader.consume(index);
                return Ok(taken);
            }
            None => {
                taken.extend_from_slice(buffer);
                let len = buffer.len();
                reader.consume(len);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, Cursor, Read};

    use crate::point::{Delimiter, Format};

    use super::*;

    fn round_trip(point: Point, format: &Format) -> Point {
        let mut out = Vec::new();
        point.print_with(&mut out, format).unwrap();

        let mut read = Point::new(-123.0, 456.0);
        read.input(&mut Cursor::new(out)).unwrap();
        read
    }

    fn samples() -> Vec<Point> {
        vec![
            Point::ORIGIN,
            Point::new(3.0, 4.0),
            Point::new(-0.1, 1.0 / 3.0),
            Point::new(1e300, -2.5e-300),
            Point::new(f64::MAX, f64::MIN_POSITIVE),
        ]
    }

    #[test]
    fn test_round_trip_is_lossless() {
        for point in samples() {
            assert_eq!(round_trip(point, &Format::default()), point);

            let comma = Format {
                delimiter: Delimiter::Comma,
                precision: None,
            };
            assert_eq!(round_trip(point, &comma), point);
        }
    }

    #[test]
    fn test_round_trip_with_precision() {
        let format = Format {
            delimiter: Delimiter::Comma,
            precision: Some(4),
        };

        for point in [Point::new(-0.1, 1.0 / 3.0), Point::new(12.34567, 8.0)] {
            assert!(round_trip(point, &format).approx_eq(&point, 1e-4));
        }
    }

    #[test]
    fn test_input_accepts_separators() {
        for text in ["3 4", "3,4", "3, 4", "  3 ,\n 4  ", "3\n4", "+3e0 4.0"] {
            let mut point = Point::default();
            point.input(&mut text.as_bytes()).unwrap();
            assert_eq!(point, Point::new(3.0, 4.0), "{text:?}");
        }
    }

    #[test]
    fn test_malformed_input_keeps_point() {
        for text in ["abc 4", "3 abc", "3,,4", ",3 4", "3 4x"] {
            let mut point = Point::new(1.5, -2.5);
            let result = point.input(&mut text.as_bytes());

            assert!(
                matches!(result, Err(ParseError::InvalidNumber { .. })),
                "{text:?}: {result:?}"
            );
            assert_eq!(point, Point::new(1.5, -2.5));
        }
    }

    #[test]
    fn test_invalid_token_is_reported() {
        let result = Point::read_from(&mut "1 two".as_bytes());
        match result {
            Err(ParseError::InvalidNumber { token, .. }) => assert_eq!(token, "two"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_exhausted_input() {
        let mut point = Point::new(9.0, 9.0);

        let result = point.input(&mut "".as_bytes());
        assert!(matches!(result, Err(ParseError::Exhausted { read: 0 })));

        let result = point.input(&mut "  \n ".as_bytes());
        assert!(matches!(result, Err(ParseError::Exhausted { read: 0 })));

        let result = point.input(&mut "5 ".as_bytes());
        assert!(matches!(result, Err(ParseError::Exhausted { read: 1 })));

        let result = point.input(&mut "5,".as_bytes());
        assert!(matches!(result, Err(ParseError::Exhausted { read: 1 })));

        assert_eq!(point, Point::new(9.0, 9.0));
    }

    #[test]
    fn test_non_finite_is_rejected() {
        for text in ["inf 1", "1 NaN", "-infinity 0"] {
            let mut point = Point::ORIGIN;
            let result = point.input(&mut text.as_bytes());

            assert!(matches!(result, Err(ParseError::NotFinite { .. })), "{text:?}");
            assert_eq!(point, Point::ORIGIN);
        }
    }

    #[test]
    fn test_consecutive_points() {
        let mut reader = Cursor::new("1 2\n3, 4\n  -5 6 rest");

        let first = Point::read_from(&mut reader).unwrap();
        let second = Point::read_from(&mut reader).unwrap();
        let third = Point::read_from(&mut reader).unwrap();

        assert_eq!(first, Point::new(1.0, 2.0));
        assert_eq!(second, Point::new(3.0, 4.0));
        assert_eq!(third, Point::new(-5.0, 6.0));

        let mut rest = String::new();
        reader.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, " rest");
    }

    /// Makes sure that tokens which are split across buffer refills are read as a whole
    #[test]
    fn test_small_buffer() {
        let reader = Cursor::new("   123.456   ,   -789.25   ");
        let mut reader = BufReader::with_capacity(2, reader);

        let point = Point::read_from(&mut reader).unwrap();
        assert_eq!(point, Point::new(123.456, -789.25));
    }

    struct FailingReader;

    impl io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "device gone"))
        }
    }

    #[test]
    fn test_io_error() {
        let mut reader = BufReader::new(FailingReader);
        let mut point = Point::new(1.0, 1.0);

        let result = point.input(&mut reader);
        assert!(matches!(result, Err(ParseError::IO(_))));
        assert_eq!(point, Point::new(1.0, 1.0));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(" 3, 4 ".parse::<Point>().unwrap(), Point::new(3.0, 4.0));
        assert_eq!(
            Point::new(0.1, -7.0).to_string().parse::<Point>().unwrap(),
            Point::new(0.1, -7.0)
        );

        let result = "1 2 3".parse::<Point>();
        match result {
            Err(ParseError::TrailingInput { rest }) => assert_eq!(rest, "3"),
            other => panic!("unexpected result: {other:?}"),
        }

        assert!(matches!(
            "1".parse::<Point>(),
            Err(ParseError::Exhausted { read: 1 })
        ));
    }
}
