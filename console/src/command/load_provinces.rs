//! [`Command`] for loading provinces into a [`Cascade`].

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{location::Scope, Node},
    infra::{api, Api},
    view::Cascade,
    Console,
};

use super::{select_location::fetch_into, Command};

pub use super::select_location::ExecutionError;

/// [`Command`] for (re)loading the provinces list of a [`Cascade`].
#[derive(Debug)]
pub struct LoadProvinces<'c> {
    /// [`Cascade`] to load the provinces of.
    pub cascade: &'c mut Cascade,
}

impl<'c, A> Command<LoadProvinces<'c>> for Console<A>
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
        cmd: LoadProvinces<'c>,
    ) -> Result<Self::Ok, Self::Err> {
        let LoadProvinces { cascade } = cmd;

        let fetch = cascade.load_provinces();
        fetch_into(self.api(), cascade, fetch).await
    }
}
