//! [`Command`] for adding a new [`Room`] to a hotel.

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{hotel, room, Room},
    infra::{api, Api},
    view::List,
    Console,
};

use super::Command;

/// [`Command`] for adding a new [`Room`] to a hotel.
#[derive(Debug)]
pub struct AddRoom<'v> {
    /// [`List`] view the created [`Room`] is appended to.
    pub view: &'v mut List<Room>,

    /// ID of the hotel the [`Room`] belongs to.
    pub hotel: hotel::Id,

    /// Details of the [`Room`], as entered.
    pub draft: room::Draft,
}

impl<'v, A> Command<AddRoom<'v>> for Console<A>
where
    A: Api<Insert<room::New>, Ok = Room, Err = Traced<api::Error>>,
{
    type Ok = Room;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: AddRoom<'v>) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AddRoom { view, hotel, draft } = cmd;

        let form = draft
            .validate()
            .map_err(E::Invalid)
            .map_err(tracerr::wrap!())?;

        let created = self
            .api()
            .execute(Insert(room::New {
                hotel_id: hotel,
                form,
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        log::debug!("added room `{}` to hotel `{hotel}`", created.name);

        view.push(created.clone());
        Ok(created)
    }
}

/// Error of [`AddRoom`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Api`] error.
    #[display("`Api` operation failed: {_0}")]
    Api(api::Error),

    /// [`room::Draft`] is invalid.
    #[display("invalid room: {_0}")]
    Invalid(room::Invalid),
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use crate::{
        domain::{facility, room, Facility},
        infra::api::mock::Mock,
        view::List,
        Command as _, Console,
    };

    use super::{AddRoom, ExecutionError};

    fn draft() -> room::Draft {
        room::Draft {
            name: "Ocean Deluxe".into(),
            price: Decimal::from(1_200_000),
            quantity: 2,
            kind: 1.into(),
            deposit: 30,
            facilities: vec![1.into()],
        }
    }

    fn mock() -> Mock {
        Mock {
            room_types: vec![room::Type {
                id: 1.into(),
                name: "DOUBLE".into(),
            }],
            facilities: vec![Facility {
                id: 1.into(),
                name: "Minibar".into(),
            }]
            .into(),
            ..Mock::default()
        }
    }

    #[tokio::test]
    async fn appends_created_room() {
        let console = Console::new(mock());
        let mut view = List::new();

        let created = console
            .execute(AddRoom {
                view: &mut view,
                hotel: 5.into(),
                draft: draft(),
            })
            .await
            .unwrap();

        assert_eq!(created.kind, Some("DOUBLE".into()));
        assert_eq!(created.facilities, [facility::Name::from("Minibar")]);
        assert_eq!(created.deposit, Decimal::new(30, 2));
        assert_eq!(view.visible_len(), 1);
    }

    #[tokio::test]
    async fn invalid_draft_is_not_sent() {
        let console = Console::new(mock());
        let mut view = List::new();

        let err = console
            .execute(AddRoom {
                view: &mut view,
                hotel: 5.into(),
                draft: room::Draft {
                    deposit: 33,
                    ..draft()
                },
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::Invalid(room::Invalid::Deposit(33)),
        ));
        assert_eq!(console.api().calls(), 0);
        assert!(view.raw().is_empty());
    }
}
