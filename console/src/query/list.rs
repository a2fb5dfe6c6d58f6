//! [`Query`] loading entities into a [`List`] view.

use common::operations::{By, Select};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        booking, facility, hotel, Booking, Facility, Hotel, Rental, Room,
        User,
    },
    filter::Filterable,
    infra::{api, Api},
    view::List,
    Console,
};

use super::Query;

/// [`Query`] (re)loading entities selected by `B` into a [`List`] view.
///
/// The [`List`] is marked as loading meanwhile. On failure, its entities are
/// left untouched.
#[derive(Debug)]
pub struct LoadList<'v, E: Filterable, B> {
    /// [`List`] view to load the entities into.
    pub view: &'v mut List<E>,

    /// Selector of the entities.
    pub by: B,
}

/// Loads [`Hotel`]s.
pub type Hotels<'v> = LoadList<'v, Hotel, hotel::list::Selector>;

/// Loads [`Booking`]s.
pub type Bookings<'v> = LoadList<'v, Booking, booking::list::Selector>;

/// Loads [`Rental`]s.
pub type Rentals<'v> = LoadList<'v, Rental, ()>;

/// Loads [`User`]s.
pub type Users<'v> = LoadList<'v, User, ()>;

/// Loads [`Facility`]s.
pub type Facilities<'v> = LoadList<'v, Facility, facility::Kind>;

/// Loads [`Room`]s of a [`Hotel`].
pub type Rooms<'v> = LoadList<'v, Room, hotel::Id>;

impl<'v, A, E, B> Query<LoadList<'v, E, B>> for Console<A>
where
    A: Api<Select<By<Vec<E>, B>>, Ok = Vec<E>, Err = Traced<api::Error>>,
    E: Filterable,
{
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        query: LoadList<'v, E, B>,
    ) -> Result<Self::Ok, Self::Err> {
        let LoadList { view, by } = query;

        view.set_loading(true);
        let entities = self
            .api()
            .execute(Select(By::new(by)))
            .await
            .inspect_err(|_| view.set_loading(false))
            .map_err(tracerr::wrap!())?;
        log::debug!("loaded {} entities", entities.len());

        view.replace(entities);
        Ok(())
    }
}
