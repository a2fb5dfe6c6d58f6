//! Remote [`Api`]-related implementations.

#[cfg(feature = "http")]
pub mod http;
#[cfg(test)]
pub(crate) mod mock;

use derive_more::{Display, Error as StdError, From};

#[cfg(feature = "http")]
pub use self::http::Http;

/// Remote API operation.
pub use common::Handler as Api;

/// [`Api`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    #[cfg(feature = "http")]
    /// [`Http`] transport error.
    #[display("HTTP error: {_0}")]
    Http(http::Error),

    /// Remote API responded with a non-successful status.
    #[display("remote API responded with `{status}`: {message}")]
    #[from(ignore)]
    Rejected {
        /// Status code of the response.
        status: u16,

        /// Body of the response.
        message: String,
    },

    /// Operation has no counterpart in the remote API.
    #[display("unsupported by the remote API: {_0}")]
    #[from(ignore)]
    Unsupported(#[error(not(source))] &'static str),
}
