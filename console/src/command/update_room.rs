//! [`Command`] for updating details of an existing [`Room`].

use common::operations::{By, Update};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{room, Room},
    infra::{api, Api},
    view::List,
    Console,
};

use super::Command;

pub use super::add_room::ExecutionError;

/// [`Command`] for updating details of an existing [`Room`], replacing the
/// listed one with the updated [`Room`] returned by the [`Api`].
#[derive(Debug)]
pub struct UpdateRoom<'v> {
    /// [`List`] view of the [`Room`].
    pub view: &'v mut List<Room>,

    /// ID of the updated [`Room`].
    pub id: room::Id,

    /// New details of the [`Room`], as entered.
    pub draft: room::Draft,
}

impl<'v, A> Command<UpdateRoom<'v>> for Console<A>
where
    A: Api<
        Update<By<Room, (room::Id, room::Form)>>,
        Ok = Room,
        Err = Traced<api::Error>,
    >,
{
    type Ok = Room;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateRoom<'v>,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateRoom { view, id, draft } = cmd;

        let form = draft
            .validate()
            .map_err(E::Invalid)
            .map_err(tracerr::wrap!())?;

        let updated = self
            .api()
            .execute(Update(By::new((id, form))))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let listed =
            view.patch_where(|r| r.id == id, |r| *r = updated.clone());
        if !listed {
            log::debug!("updated room `{id}` is not listed");
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use crate::{
        domain::{room, Room},
        infra::api::mock::Mock,
        view::List,
        Command as _, Console,
    };

    use super::{ExecutionError, UpdateRoom};

    fn room(id: i64) -> Room {
        Room {
            id: id.into(),
            name: format!("Room {id}").into(),
            price: Decimal::from(500_000),
            quantity: 1,
            kind: None,
            facilities: vec![],
            deposit: Decimal::ZERO,
        }
    }

    fn draft(name: &str) -> room::Draft {
        room::Draft {
            name: name.into(),
            price: Decimal::from(650_000),
            quantity: 4,
            kind: 1.into(),
            deposit: 50,
            facilities: vec![],
        }
    }

    #[tokio::test]
    async fn replaces_listed_room_in_place() {
        let console = Console::new(Mock {
            rooms: vec![room(1), room(2)].into(),
            room_types: vec![room::Type {
                id: 1.into(),
                name: "SUITE".into(),
            }],
            ..Mock::default()
        });
        let mut view = List::new();
        view.replace(vec![room(1), room(2)]);

        _ = console
            .execute(UpdateRoom {
                view: &mut view,
                id: 1.into(),
                draft: draft("Royal"),
            })
            .await
            .unwrap();

        let first = view.raw().first().unwrap();
        assert_eq!(first.name, "Royal".into());
        assert_eq!(first.price, Decimal::from(650_000));
        assert_eq!(first.kind, Some("SUITE".into()));
        assert_eq!(first.deposit, Decimal::new(5, 1));
        assert_eq!(view.raw().len(), 2);
    }

    #[tokio::test]
    async fn failure_keeps_listed_room() {
        let console = Console::new(Mock::default().failing(500));
        let mut view = List::new();
        view.replace(vec![room(1)]);

        let err = console
            .execute(UpdateRoom {
                view: &mut view,
                id: 1.into(),
                draft: draft("Royal"),
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::Api(_)));
        assert_eq!(view.raw()[0].name, "Room 1".into());
    }

    #[tokio::test]
    async fn blank_name_is_not_sent() {
        let console = Console::new(Mock::default());
        let mut view = List::new();

        let err = console
            .execute(UpdateRoom {
                view: &mut view,
                id: 1.into(),
                draft: draft("  "),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::Invalid(room::Invalid::EmptyName),
        ));
        assert_eq!(console.api().calls(), 0);
    }
}
