//! [`Command`] for confirming a [`Booking`] by its hotel owner.

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

/// [`Command`] for confirming a [`Booking`] by its hotel owner.
#[derive(Debug)]
pub struct ConfirmBooking<'v> {
    /// [`List`] view the [`Booking`] is listed in.
    pub view: &'v mut List<Booking>,

    /// ID of the [`Booking`] to confirm.
    pub id: booking::Id,
}

impl<'v, A> Command<ConfirmBooking<'v>> for Console<A>
where
    A: Api<Perform<By<bool, booking::Id>>, Ok = bool, Err = Traced<api::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: ConfirmBooking<'v>,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ConfirmBooking { view, id } = cmd;

        let confirmed = self
            .api()
            .execute(Perform(By::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if !confirmed {
            return Err(tracerr::new!(E::Declined(id)));
        }

        _ = view.patch_status(id, booking::Status::Confirmed);
        Ok(())
    }
}

/// Error of [`ConfirmBooking`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Api`] error.
    #[display("`Api` operation failed: {_0}")]
    Api(api::Error),

    /// Server declined to confirm the [`Booking`].
    #[display("`Booking(id: {_0})` confirmation was declined")]
    #[from(ignore)]
    Declined(#[error(not(source))] booking::Id),
}
