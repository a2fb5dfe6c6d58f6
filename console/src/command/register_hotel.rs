//! [`Command`] for registering a new [`Hotel`].

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Hotel;
use crate::{
    domain::{facility, hotel},
    infra::{api, Api},
    view::Cascade,
    Console,
};

use super::Command;

/// [`Command`] for registering a new [`Hotel`] located at the complete
/// selection of a location [`Cascade`].
#[derive(Debug)]
pub struct RegisterHotel<'c> {
    /// [`Cascade`] the [`Hotel`] location is selected in.
    pub cascade: &'c Cascade,

    /// Name of the [`Hotel`], as entered.
    pub name: String,

    /// Contact email of the [`Hotel`], as entered.
    pub email: Option<String>,

    /// Contact phone number of the [`Hotel`], as entered.
    pub phone: Option<String>,

    /// Description of the [`Hotel`], as entered.
    pub description: Option<String>,

    /// Street of the [`Hotel`], as entered.
    pub street: Option<String>,

    /// IDs of the facilities the [`Hotel`] provides.
    pub facilities: Vec<facility::Id>,
}

/// Trims the provided `input`, treating a blank one as missing.
pub(super) fn non_blank<T: From<String>>(
    input: Option<String>,
) -> Option<T> {
    input
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .map(T::from)
}

impl<'c, A> Command<RegisterHotel<'c>> for Console<A>
where
    A: Api<Insert<hotel::Registration>, Ok = (), Err = Traced<api::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: RegisterHotel<'c>,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let RegisterHotel {
            cascade,
            name,
            email,
            phone,
            description,
            street,
            facilities,
        } = cmd;

        let name = non_blank::<hotel::Name>(Some(name))
            .ok_or(E::EmptyName)
            .map_err(tracerr::wrap!())?;
        let address = cascade
            .selection()
            .ok_or(E::IncompleteLocation)
            .map_err(tracerr::wrap!())?;

        self.api()
            .execute(Insert(hotel::Registration {
                name,
                email: non_blank(email),
                phone: non_blank(phone),
                description: non_blank(description),
                street: non_blank(street),
                address,
                facilities,
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`RegisterHotel`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Api`] error.
    #[display("`Api` operation failed: {_0}")]
    Api(api::Error),

    /// [`hotel::Name`] is blank.
    #[display("hotel name is required")]
    #[from(ignore)]
    EmptyName,

    /// Province, district or ward is not selected.
    #[display("province, district and ward must be selected")]
    #[from(ignore)]
    IncompleteLocation,
}
