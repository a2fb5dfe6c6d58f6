//! [`Command`] for checking a guest in by a [`booking::Code`].

use common::operations::{By, Perform};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{booking, Booking},
    infra::{api, Api},
    view::List,
    Console,
};

use super::Command;

/// [`Command`] for checking a guest in by a [`booking::Code`].
///
/// The checked-in [`Booking`] is returned and, if listed, patched in the
/// [`List`] view with its new status.
#[derive(Debug)]
pub struct CheckInBooking<'v> {
    /// [`List`] view the [`Booking`] may be listed in.
    pub view: &'v mut List<Booking>,

    /// [`booking::Code`] presented by the guest, as entered.
    pub code: String,
}

impl<'v, A> Command<CheckInBooking<'v>> for Console<A>
where
    A: Api<
        Perform<By<Booking, booking::Code>>,
        Ok = Booking,
        Err = Traced<api::Error>,
    >,
{
    type Ok = Booking;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CheckInBooking<'v>,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CheckInBooking { view, code } = cmd;

        let code = code.trim();
        if code.is_empty() {
            return Err(tracerr::new!(E::EmptyCode));
        }

        let booking = self
            .api()
            .execute(Perform(By::new(booking::Code::from(code))))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        _ = view.patch_status(booking.id, booking.status);
        Ok(booking)
    }
}

/// Error of [`CheckInBooking`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Api`] error.
    #[display("`Api` operation failed: {_0}")]
    Api(api::Error),

    /// [`booking::Code`] is not provided.
    #[display("booking code is required")]
    #[from(ignore)]
    EmptyCode,
}
