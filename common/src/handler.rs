//! [`Handler`] abstraction shared by remote API calls, commands and queries.

use std::future::Future;

/// Asynchronous handler of `Args`, resolving into either [`Handler::Ok`] or
/// [`Handler::Err`].
///
/// Implemented for every remote API call, console command and query.
pub trait Handler<Args = ()> {
    /// Outcome of a successful execution.
    type Ok;

    /// Error of a failed execution.
    type Err;

    /// Executes this [`Handler`] with the provided `args`.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}
