//! [`Command`] for selecting a location in a [`Cascade`].

use common::operations::{By, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        location::{Id, Scope, Tier},
        Node,
    },
    infra::{api, Api},
    view::{cascade::Fetch, Cascade},
    Console,
};

use super::Command;

/// [`Command`] for selecting a location of the provided [`Tier`] in a
/// [`Cascade`], fetching the options of the [`Tier`] below.
#[derive(Debug)]
pub struct SelectLocation<'c> {
    /// [`Cascade`] to select the location in.
    pub cascade: &'c mut Cascade,

    /// [`Tier`] of the selected location.
    pub tier: Tier,

    /// ID of the selected location.
    ///
    /// [`None`] clears the selection.
    pub id: Option<Id>,
}

impl<'c, A> Command<SelectLocation<'c>> for Console<A>
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
        cmd: SelectLocation<'c>,
    ) -> Result<Self::Ok, Self::Err> {
        let SelectLocation { cascade, tier, id } = cmd;

        let fetch = match tier {
            Tier::Province => cascade.set_province(id),
            Tier::District => cascade.set_district(id),
            Tier::Ward => {
                cascade.set_ward(id);
                None
            }
        };
        match fetch {
            Some(fetch) => fetch_into(self.api(), cascade, fetch).await,
            None => Ok(()),
        }
    }
}

/// Performs the provided [`Fetch`] and resolves it in the [`Cascade`].
///
/// A superseded [`Fetch`] is silently discarded.
pub(super) async fn fetch_into<A>(
    api: &A,
    cascade: &mut Cascade,
    fetch: Fetch,
) -> Result<(), Traced<ExecutionError>>
where
    A: Api<
        Select<By<Vec<Node>, Scope>>,
        Ok = Vec<Node>,
        Err = Traced<api::Error>,
    >,
{
    let result = api.execute(Select(By::new(fetch.scope()))).await;
    let resolved = match &result {
        Ok(nodes) => cascade.resolve(fetch, Ok::<_, &str>(nodes.clone())),
        Err(e) => {
            cascade.resolve(fetch, Err(AsRef::<api::Error>::as_ref(e)))
        }
    };
    if let Err(stale) = resolved {
        log::debug!("{stale}");
        return Ok(());
    }
    result
        .map(drop)
        .map_err(tracerr::map_from_and_wrap!(=> ExecutionError))
}

/// Error of [`SelectLocation`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Api`] error.
    #[display("`Api` operation failed: {_0}")]
    Api(api::Error),
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

    use super::{fetch_into, ExecutionError, SelectLocation};

    fn node(id: i64, parent: i64) -> Node {
        Node {
            id: id.into(),
            name: format!("Node {id}").into(),
            parent_id: Some(parent.into()),
        }
    }

    fn nodes() -> HashMap<Scope, Vec<Node>> {
        HashMap::from([
            (Scope::Districts(1.into()), vec![node(10, 1), node(11, 1)]),
            (Scope::Wards(10.into()), vec![node(100, 10)]),
        ])
    }

    #[tokio::test]
    async fn loads_options_of_selected_province() {
        let console = Console::new(Mock {
            nodes: nodes(),
            ..Mock::default()
        });
        let mut cascade = Cascade::new();

        console
            .execute(SelectLocation {
                cascade: &mut cascade,
                tier: Tier::Province,
                id: Some(1.into()),
            })
            .await
            .unwrap();
        console
            .execute(SelectLocation {
                cascade: &mut cascade,
                tier: Tier::District,
                id: Some(10.into()),
            })
            .await
            .unwrap();

        assert_eq!(cascade.level(Tier::District).options().len(), 2);
        assert_eq!(
            cascade.level(Tier::Ward).options(),
            [node(100, 10)].as_slice(),
        );
    }

    #[tokio::test]
    async fn surfaces_failure_with_empty_options() {
        let console = Console::new(
            Mock {
                nodes: nodes(),
                ..Mock::default()
            }
            .failing(503),
        );
        let mut cascade = Cascade::new();

        let err = console
            .execute(SelectLocation {
                cascade: &mut cascade,
                tier: Tier::Province,
                id: Some(1.into()),
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::Api(_)));
        assert!(matches!(cascade.level(Tier::District), State::Failed(_)));
        assert!(cascade.level(Tier::District).options().is_empty());
    }

    #[tokio::test]
    async fn selecting_ward_fetches_nothing() {
        let console = Console::new(Mock::default());
        let mut cascade = Cascade::new();

        console
            .execute(SelectLocation {
                cascade: &mut cascade,
                tier: Tier::Ward,
                id: Some(100.into()),
            })
            .await
            .unwrap();

        assert_eq!(console.api().calls(), 0);
        assert_eq!(cascade.ward(), Some(100.into()));
    }

    #[tokio::test]
    async fn discards_failure_of_superseded_fetch() {
        let console = Console::new(Mock::default().failing(503));
        let mut cascade = Cascade::new();
        let first = cascade.set_province(Some(1.into())).unwrap();
        let second = cascade.set_province(Some(2.into())).unwrap();

        fetch_into(console.api(), &mut cascade, first).await.unwrap();

        assert_eq!(cascade.level(Tier::District), &State::Loading(second));
    }
}
