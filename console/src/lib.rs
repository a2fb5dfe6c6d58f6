//! Console contains the administration logic of the hotel booking platform.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod filter;
pub mod infra;
pub mod query;
pub mod view;

#[cfg(doc)]
use infra::Api;

pub use self::{command::Command, query::Query};

/// Administration console driving its views through an [`Api`].
#[derive(Clone, Debug)]
pub struct Console<A> {
    /// [`Api`] of this [`Console`].
    api: A,
}

impl<A> Console<A> {
    /// Creates a new [`Console`] on top of the provided [`Api`].
    #[must_use]
    pub const fn new(api: A) -> Self {
        Self { api }
    }

    /// Returns [`Api`] of this [`Console`].
    #[must_use]
    pub const fn api(&self) -> &A {
        &self.api
    }
}
