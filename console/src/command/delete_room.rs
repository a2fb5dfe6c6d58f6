//! [`Command`] for deleting a [`Room`].

use common::operations::{By, Delete};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{room, Room},
    infra::{api, Api},
    view::List,
    Console,
};

use super::Command;

/// [`Command`] for deleting a [`Room`], removing it from its [`List`] view
/// once the [`Api`] succeeds.
#[derive(Debug)]
pub struct DeleteRoom<'v> {
    /// [`List`] view of the [`Room`].
    pub view: &'v mut List<Room>,

    /// ID of the deleted [`Room`].
    pub id: room::Id,
}

impl<'v, A> Command<DeleteRoom<'v>> for Console<A>
where
    A: Api<Delete<By<Room, room::Id>>, Ok = (), Err = Traced<api::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteRoom<'v>,
    ) -> Result<Self::Ok, Self::Err> {
        let DeleteRoom { view, id } = cmd;

        self.api()
            .execute(Delete(By::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> ExecutionError))?;

        if view.remove_where(|r| r.id == id).is_none() {
            log::debug!("deleted room `{id}` is not listed");
        }
        Ok(())
    }
}

/// Error of [`DeleteRoom`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Api`] error.
    #[display("`Api` operation failed: {_0}")]
    Api(api::Error),
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use crate::{
        domain::Room, infra::api::mock::Mock, view::List, Command as _,
        Console,
    };

    use super::{DeleteRoom, ExecutionError};

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

    #[tokio::test]
    async fn removes_deleted_room() {
        let console = Console::new(Mock {
            rooms: vec![room(1), room(2)].into(),
            ..Mock::default()
        });
        let mut view = List::new();
        view.replace(vec![room(1), room(2)]);

        console
            .execute(DeleteRoom {
                view: &mut view,
                id: 1.into(),
            })
            .await
            .unwrap();

        let ids: Vec<i64> = view.visible().map(|r| r.id.into()).collect();
        assert_eq!(ids, [2]);
        assert_eq!(console.api().rooms.borrow().len(), 1);
    }

    #[tokio::test]
    async fn rejected_deletion_keeps_room() {
        let console = Console::new(Mock::default());
        let mut view = List::new();
        view.replace(vec![room(1)]);

        let err = console
            .execute(DeleteRoom {
                view: &mut view,
                id: 1.into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::Api(_)));
        assert_eq!(view.raw().len(), 1);
    }
}
