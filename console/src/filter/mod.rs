//! Client-side filtering of already fetched entities.
//!
//! A [`Criteria`] set is the conjunction of its active [`Criterion`]s. Every
//! entity kind describes its filterable fields by implementing [`Filterable`]
//! with a dedicated [`Key`] enum.

mod criteria;
mod criterion;

use std::{borrow::Cow, fmt, str::FromStr};

use common::Date;

pub use self::{
    criteria::Criteria,
    criterion::{Criterion, DateRange, ParseError},
};

/// Entity which can be filtered by [`Criteria`].
pub trait Filterable {
    /// [`Key`] naming the filterable fields of this entity.
    type Key: Key;

    /// Returns the [`Field`] of this entity designated by the provided `key`.
    fn field(&self, key: Self::Key) -> Field<'_>;
}

/// Key of a filterable field.
pub trait Key: Copy + fmt::Debug + FromStr + Ord {
    /// Returns the [`Kind`] of [`Criterion`] this [`Key`] is filtered with by
    /// default.
    fn kind(self) -> Kind;
}

/// Kind of a [`Criterion`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    /// [`Criterion::Text`].
    Text,

    /// [`Criterion::Exact`].
    Exact,

    /// [`Criterion::Range`].
    Range,
}

/// Value of an entity field a [`Criterion`] is matched against.
#[derive(Clone, Debug)]
pub enum Field<'a> {
    /// Text candidates, the field matches if any of them does.
    ///
    /// Missing values are simply absent.
    Text(Vec<&'a str>),

    /// Single scalar value (enum literal, ID), if any.
    Value(Option<Cow<'a, str>>),

    /// Start and end [`Date`]s of a span, if any.
    Span(Option<Date>, Option<Date>),
}

impl<'a> Field<'a> {
    /// Creates a [`Field::Text`] out of a single optional value.
    #[must_use]
    pub fn text(value: Option<&'a str>) -> Self {
        Self::Text(value.into_iter().collect())
    }

    /// Creates a [`Field::Value`] out of anything [`Display`]able.
    ///
    /// [`Display`]: fmt::Display
    #[must_use]
    pub fn display(value: Option<impl fmt::Display>) -> Self {
        Self::Value(value.map(|v| Cow::Owned(v.to_string())))
    }
}

/// Returns the entities matching every active [`Criterion`] of the provided
/// [`Criteria`], preserving their relative order.
#[must_use]
pub fn apply<E>(entities: &[E], criteria: &Criteria<E::Key>) -> Vec<E>
where
    E: Clone + Filterable,
{
    entities
        .iter()
        .filter(|e| criteria.matches(*e))
        .cloned()
        .collect()
}

/// Returns positions of the entities matching every active [`Criterion`] of
/// the provided [`Criteria`], in ascending order.
#[must_use]
pub fn positions<E>(entities: &[E], criteria: &Criteria<E::Key>) -> Vec<usize>
where
    E: Filterable,
{
    entities
        .iter()
        .enumerate()
        .filter_map(|(i, e)| criteria.matches(e).then_some(i))
        .collect()
}

/// Returns distinct values of the field designated by the provided `key`, in
/// order of their first appearance.
///
/// [`Field::Span`]s have no values.
#[must_use]
pub fn distinct<E: Filterable>(entities: &[E], key: E::Key) -> Vec<String> {
    let mut values = Vec::<String>::new();
    for entity in entities {
        let candidates = match entity.field(key) {
            Field::Text(c) => c.into_iter().map(str::to_owned).collect(),
            Field::Value(v) => v.map(Cow::into_owned).into_iter().collect(),
            Field::Span(..) => Vec::new(),
        };
        for value in candidates {
            if !values.contains(&value) {
                values.push(value);
            }
        }
    }
    values
}
