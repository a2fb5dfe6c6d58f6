//! [`Command`] for adding a new [`Facility`].

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{facility, Facility},
    infra::{api, Api},
    view::List,
    Console,
};

use super::Command;

/// [`Command`] for adding a new [`Facility`] of a hotel or of a room.
#[derive(Debug)]
pub struct AddFacility<'v> {
    /// [`List`] view the created [`Facility`] is appended to.
    pub view: &'v mut List<Facility>,

    /// [`facility::Kind`] of the new [`Facility`].
    pub kind: facility::Kind,

    /// Name of the new [`Facility`], as entered.
    pub name: String,
}

impl<'v, A> Command<AddFacility<'v>> for Console<A>
where
    A: Api<Insert<facility::New>, Ok = Facility, Err = Traced<api::Error>>,
{
    type Ok = Facility;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: AddFacility<'v>,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AddFacility { view, kind, name } = cmd;

        let name = facility::Name::new(name)
            .ok_or(E::EmptyName)
            .map_err(tracerr::wrap!())?;

        let created = self
            .api()
            .execute(Insert(facility::New { kind, name }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        log::debug!("added {kind} facility `{}`", created.name);

        view.push(created.clone());
        Ok(created)
    }
}

/// Error of [`AddFacility`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Api`] error.
    #[display("`Api` operation failed: {_0}")]
    Api(api::Error),

    /// [`facility::Name`] is blank.
    #[display("facility name is required")]
    #[from(ignore)]
    EmptyName,
}

#[cfg(test)]
mod spec {
    use crate::{
        domain::facility, infra::api::mock::Mock, view::List, Command as _,
        Console,
    };

    use super::{AddFacility, ExecutionError};

    #[tokio::test]
    async fn appends_created_facility() {
        let console = Console::new(Mock::default());
        let mut view = List::new();

        let created = console
            .execute(AddFacility {
                view: &mut view,
                kind: facility::Kind::Room,
                name: "  Minibar ".into(),
            })
            .await
            .unwrap();

        assert_eq!(created.name, facility::Name::from("Minibar"));
        let names: Vec<_> = view.visible().map(|f| f.name.clone()).collect();
        assert_eq!(names, [facility::Name::from("Minibar")]);
    }

    #[tokio::test]
    async fn blank_name_is_not_sent() {
        let console = Console::new(Mock::default());
        let mut view = List::new();

        let err = console
            .execute(AddFacility {
                view: &mut view,
                kind: facility::Kind::Hotel,
                name: " ".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::EmptyName));
        assert_eq!(console.api().calls(), 0);
        assert!(view.raw().is_empty());
    }
}
