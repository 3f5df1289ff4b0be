use error_stack::{IntoReport, Report, Result, ResultExt};
use thiserror::Error;

use crate::point::Point;

/// Wraps the result in a given context, lazily.
macro_rules! ctx {
    ($result:expr, $ctx:expr) => {
        ($result).change_context_lazy(|| $ctx)
    };
}

/// Wraps the result in a report with a given context, lazily.
macro_rules! rctx {
    ($result:expr, $ctx:expr) => {
        ctx!(($result).report(), $ctx)
    };
}

#[derive(Clone, Debug, Error)]
#[error("Invalid point (input: {input:?})")]
pub struct ParsePointError {
    pub input: String,
}

impl From<&str> for ParsePointError {
    fn from(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }
}

/// Parse a point written either as `Point(x,y)` or as a bare `x,y` pair (arbitrary spaces allowed).
pub(crate) fn parse_point(input: &str) -> Result<Point, ParsePointError> {
    let trimmed = input.trim();
    let pair = trimmed
        .strip_prefix("Point(")
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(trimmed);

    let (x, y) = pair.split_once(',').ok_or_else(|| {
        Report::new(ParsePointError::from(input)).attach_printable("Could not split with ','")
    })?;

    let x = rctx!(x.trim().parse::<f64>(), ParsePointError::from(input))
        .attach_printable_lazy(|| format!("Could not parse x coordinate {x:?}"))?;
    let y = rctx!(y.trim().parse::<f64>(), ParsePointError::from(input))
        .attach_printable_lazy(|| format!("Could not parse y coordinate {y:?}"))?;

    Ok(Point::new(x, y))
}
