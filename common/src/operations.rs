//! Abstract operations addressed to a [`Handler`].
//!
//! [`Handler`]: crate::Handler

use std::marker::PhantomData;

/// Creation of a new entity out of `T`.
#[derive(Clone, Copy, Debug)]
pub struct Insert<T>(pub T);

/// Change of an existing entity described by `T`.
#[derive(Clone, Copy, Debug)]
pub struct Update<T>(pub T);

/// Removal of an existing entity described by `T`.
#[derive(Clone, Copy, Debug)]
pub struct Delete<T>(pub T);

/// Retrieval described by `T`.
#[derive(Clone, Copy, Debug)]
pub struct Select<T>(pub T);

/// Action described by `T` having no natural create/read/update meaning
/// (like confirming or checking in a booking).
#[derive(Clone, Copy, Debug)]
pub struct Perform<T>(pub T);

/// Addressing of `W` by `B`.
///
/// `W` names the outcome, so the same `B` may address different things
/// (like a province ID addressing either the province or its districts).
#[derive(Clone, Copy, Debug)]
pub struct By<W, B> {
    /// Addressed outcome.
    _what: PhantomData<W>,

    /// Address itself.
    by: B,
}

impl<W, B> By<W, B> {
    /// Addresses `W` by the provided `by` value.
    #[must_use]
    pub const fn new(by: B) -> Self {
        Self {
            _what: PhantomData,
            by,
        }
    }

    /// Returns the address of this [`By`].
    #[must_use]
    pub const fn inner(&self) -> &B {
        &self.by
    }

    /// Unwraps the address of this [`By`].
    #[must_use]
    pub fn into_inner(self) -> B {
        self.by
    }
}
