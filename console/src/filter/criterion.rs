//! [`Criterion`] definitions.

use std::str::FromStr;

use common::{date, Date};
use derive_more::{Display, Error, From};

use super::{Field, Kind};

/// Single predicate of a [`Criteria`] set.
///
/// [`Criteria`]: super::Criteria
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Criterion {
    /// Case-insensitive substring match.
    ///
    /// Surrounding whitespace of the needle is ignored.
    Text(String),

    /// Case-sensitive exact match.
    ///
    /// An empty value and the [`Criterion::WILDCARD`] match everything.
    Exact(String),

    /// Inclusive [`DateRange`] match.
    Range(DateRange),
}

impl Criterion {
    /// Literal value of an [`Criterion::Exact`] matching everything.
    pub const WILDCARD: &'static str = "ALL";

    /// Creates a new [`Criterion::Text`].
    #[must_use]
    pub fn text(needle: impl Into<String>) -> Self {
        Self::Text(needle.into())
    }

    /// Creates a new [`Criterion::Exact`].
    #[must_use]
    pub fn exact(value: impl Into<String>) -> Self {
        Self::Exact(value.into())
    }

    /// Creates a new [`Criterion::Range`].
    #[must_use]
    pub fn range(start: Option<Date>, end: Option<Date>) -> Self {
        Self::Range(DateRange { start, end })
    }

    /// Parses the provided `input` as a [`Criterion`] of the given [`Kind`].
    ///
    /// # Errors
    ///
    /// If the `input` is not a valid [`DateRange`] for [`Kind::Range`].
    pub fn parse(kind: Kind, input: &str) -> Result<Self, ParseError> {
        Ok(match kind {
            Kind::Text => Self::text(input),
            Kind::Exact => Self::exact(input),
            Kind::Range => Self::Range(input.parse()?),
        })
    }

    /// Indicates whether this [`Criterion`] restricts anything.
    ///
    /// Inactive [`Criterion`]s match every entity.
    #[must_use]
    pub fn is_active(&self) -> bool {
        match self {
            Self::Text(needle) => !needle.trim().is_empty(),
            Self::Exact(value) => {
                let value = value.trim();
                !value.is_empty() && value != Self::WILDCARD
            }
            Self::Range(range) => !range.is_unbounded(),
        }
    }

    /// Checks whether the provided [`Field`] satisfies this [`Criterion`].
    #[must_use]
    pub fn matches(&self, field: &Field<'_>) -> bool {
        if !self.is_active() {
            return true;
        }

        match (self, field) {
            (Self::Text(needle), Field::Text(candidates)) => {
                let needle = needle.trim().to_lowercase();
                candidates
                    .iter()
                    .any(|c| c.to_lowercase().contains(&needle))
            }
            (Self::Text(needle), Field::Value(value)) => {
                let needle = needle.trim().to_lowercase();
                value
                    .as_deref()
                    .is_some_and(|v| v.to_lowercase().contains(&needle))
            }
            (Self::Exact(expected), Field::Value(value)) => {
                value.as_deref() == Some(expected.trim())
            }
            (Self::Exact(expected), Field::Text(candidates)) => {
                candidates.iter().any(|c| *c == expected.trim())
            }
            (Self::Range(range), Field::Span(start, end)) => {
                range.contains(*start, *end)
            }
            (Self::Text(_) | Self::Exact(_), Field::Span(..))
            | (Self::Range(_), Field::Text(_) | Field::Value(_)) => false,
        }
    }
}

/// Range of [`Date`]s with inclusive and optional bounds.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DateRange {
    /// Earliest allowed start [`Date`], if restricted.
    pub start: Option<Date>,

    /// Latest allowed end [`Date`], if restricted.
    pub end: Option<Date>,
}

impl DateRange {
    /// Separator of bounds in a [`DateRange`] string representation.
    pub const SEPARATOR: &'static str = "..";

    /// Indicates whether this [`DateRange`] has no bounds at all.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Checks whether the span between `start` and `end` lies fully within
    /// this [`DateRange`].
    ///
    /// Each bound requires the corresponding span edge to be present.
    #[must_use]
    pub fn contains(&self, start: Option<Date>, end: Option<Date>) -> bool {
        let after_start = match (self.start, start) {
            (None, _) => true,
            (Some(bound), Some(start)) => start >= bound,
            (Some(_), None) => false,
        };
        let before_end = match (self.end, end) {
            (None, _) => true,
            (Some(bound), Some(end)) => end <= bound,
            (Some(_), None) => false,
        };
        after_start && before_end
    }
}

impl FromStr for DateRange {
    type Err = ParseError;

    /// Parses `START..END`, where either bound may be omitted, or a single
    /// `DATE` meaning `DATE..DATE`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bound = |s: &str| -> Result<Option<Date>, ParseError> {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            Ok(Some(Date::from_iso(s)?))
        };

        match s.split_once(Self::SEPARATOR) {
            Some((start, end)) => Ok(Self {
                start: bound(start)?,
                end: bound(end)?,
            }),
            None => {
                let date = bound(s)?;
                Ok(Self {
                    start: date,
                    end: date,
                })
            }
        }
    }
}

/// Error of parsing a [`Criterion`].
#[derive(Clone, Debug, Display, Error, From)]
pub enum ParseError {
    /// Filter key is not known for the filtered entity.
    #[display("unknown filter key `{_0}`")]
    #[from(ignore)]
    UnknownKey(#[error(not(source))] String),

    /// Malformed [`Date`] in a [`DateRange`].
    #[display("malformed date range: {_0}")]
    Date(date::ParseError),
}
