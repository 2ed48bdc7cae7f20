//! Two-block puzzle input parser.
//!
//! The input is a list of `X,Y` dot coordinates, a single blank line, then a
//! list of `fold along a=v` instructions. The parser only builds the
//! [`Data`]; it never folds anything.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::geometry::{Axis, Fold, Point, PointSet};

/// Errors that can occur while reading or parsing the puzzle input.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A coordinate line that is not two comma-separated integers.
    #[error("file contains invalid point: '{line}'")]
    InvalidPoint { line: String },

    /// The blank line separating dots from folds never showed up.
    #[error("file contains no empty line")]
    NoSeparator,

    /// A fold line missing the literal `fold along ` prefix.
    #[error("fold instruction without prefix: '{line}'")]
    MissingPrefix { line: String },

    /// A fold line whose remainder is not exactly `axis=value`.
    #[error("fold instruction without assignment: '{line}'")]
    MissingAssignment { line: String },

    /// A fold axis other than `x` or `y`.
    #[error("fold instruction with invalid axis: '{axis}'")]
    InvalidAxis { axis: String },

    /// A fold value that is not an integer.
    #[error("fold instruction with invalid value: '{value}'")]
    InvalidValue { value: String },

    /// The input could not be opened or read at all.
    #[error("could not read input: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },
}

/// The parsed puzzle input: the starting dots plus the folds in input order.
#[derive(Debug, Default)]
pub struct Data {
    pub points: PointSet,
    pub folds: Vec<Fold>,
}

/// Parse the two-block input format from any buffered reader.
pub fn parse<R: BufRead>(input: R) -> Result<Data, ParseError> {
    let mut data = Data::default();
    let mut lines = input.lines();
    let mut found_separator = false;

    for line in &mut lines {
        let line = line.map_err(|source| ParseError::Io { source })?;
        if line.is_empty() {
            found_separator = true;
            break;
        }
        data.points.insert(parse_point(&line)?);
    }

    if !found_separator {
        return Err(ParseError::NoSeparator);
    }

    for line in lines {
        let line = line.map_err(|source| ParseError::Io { source })?;
        data.folds.push(parse_fold(&line)?);
    }

    Ok(data)
}

/// Open `path` and parse it. Open and read failures both surface as the
/// generic [`ParseError::Io`] variant.
pub fn parse_file(path: &Path) -> Result<Data, ParseError> {
    let file = File::open(path).map_err(|source| ParseError::Io { source })?;
    parse(BufReader::new(file))
}

fn parse_point(line: &str) -> Result<Point, ParseError> {
    let invalid = || ParseError::InvalidPoint {
        line: line.to_string(),
    };
    let (x, y) = line.split_once(',').ok_or_else(invalid)?;
    // A third comma field ends up in `y` and fails the integer parse below.
    Ok(Point {
        x: x.parse().map_err(|_| invalid())?,
        y: y.parse().map_err(|_| invalid())?,
    })
}

fn parse_fold(line: &str) -> Result<Fold, ParseError> {
    let rest = line
        .strip_prefix("fold along ")
        .ok_or_else(|| ParseError::MissingPrefix {
            line: line.to_string(),
        })?;

    let (axis, value) = rest
        .split_once('=')
        .filter(|(_, v)| !v.contains('='))
        .ok_or_else(|| ParseError::MissingAssignment {
            line: line.to_string(),
        })?;

    let on = match axis {
        "x" => Axis::X,
        "y" => Axis::Y,
        other => {
            return Err(ParseError::InvalidAxis {
                axis: other.to_string(),
            });
        }
    };

    let value = value.parse().map_err(|_| ParseError::InvalidValue {
        value: value.to_string(),
    })?;

    Ok(Fold { on, value })
}
