//! [`Command`] for restoring an existing location selection in a [`Cascade`].

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{
        location::{Id, Scope},
        Node,
    },
    infra::{api, Api},
    view::Cascade,
    Console,
};

use super::{select_location::fetch_into, Command};

pub use super::select_location::ExecutionError;

/// [`Command`] for pre-filling a [`Cascade`] with an already stored
/// location (like the one of an edited hotel), loading the options of every
/// selected level without clearing the selections below it.
#[derive(Debug)]
pub struct RestoreLocation<'c> {
    /// [`Cascade`] to restore the selection in.
    pub cascade: &'c mut Cascade,

    /// ID of the selected province.
    pub province: Option<Id>,

    /// ID of the selected district.
    pub district: Option<Id>,

    /// ID of the selected ward.
    pub ward: Option<Id>,
}

impl<'c, A> Command<RestoreLocation<'c>> for Console<A>
where
    A: Api<
        Select<By<Vec<Node>, Scope>>,
        Ok = Vec<Node>,
        Err = Traced<api::Error>,
    >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: RestoreLocation<'c>,
    ) -> Result<Self::Ok, Self::Err> {
        let RestoreLocation {
            cascade,
            province,
            district,
            ward,
        } = cmd;

        let mut first_err = None;
        for fetch in cascade.restore(province, district, ward) {
            if let Err(e) = fetch_into(self.api(), cascade, fetch).await {
                _ = first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}

#[cfg(test)]
mod spec {
    use std::collections::HashMap;

    use crate::{
        domain::{
            location::{Scope, Tier},
            Node,
        },
        infra::api::mock::Mock,
        view::{cascade::State, Cascade},
        Command as _, Console,
    };

    use super::{ExecutionError, RestoreLocation};

    fn node(id: i64, parent: Option<i64>) -> Node {
        Node {
            id: id.into(),
            name: format!("Node {id}").into(),
            parent_id: parent.map(Into::into),
        }
    }

    fn restore(cascade: &mut Cascade) -> RestoreLocation<'_> {
        RestoreLocation {
            cascade,
            province: Some(1.into()),
            district: Some(10.into()),
            ward: Some(100.into()),
        }
    }

    #[tokio::test]
    async fn prefills_every_level() {
        let console = Console::new(Mock {
            nodes: HashMap::from([
                (Scope::Provinces, vec![node(1, None), node(2, None)]),
                (Scope::Districts(1.into()), vec![node(10, Some(1))]),
                (Scope::Wards(10.into()), vec![node(100, Some(10))]),
            ]),
            ..Mock::default()
        });
        let mut cascade = Cascade::new();

        console.execute(restore(&mut cascade)).await.unwrap();

        assert_eq!(console.api().calls(), 3);
        assert_eq!(cascade.level(Tier::Province).options().len(), 2);
        assert_eq!(
            cascade.level(Tier::Ward).options(),
            [node(100, Some(10))].as_slice(),
        );
        assert_eq!(cascade.district(), Some(10.into()));
        assert_eq!(cascade.ward(), Some(100.into()));
    }

    #[tokio::test]
    async fn surfaces_failure_keeping_selection() {
        let console = Console::new(Mock::default().failing(500));
        let mut cascade = Cascade::new();

        let err = console.execute(restore(&mut cascade)).await.unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::Api(_)));
        assert!(matches!(cascade.level(Tier::Ward), State::Failed(_)));
        assert_eq!(cascade.ward(), Some(100.into()));
    }
}
