//! [`Query`] collection related to location [`Node`]s.

use common::operations::By;

#[cfg(doc)]
use crate::Query;
use crate::domain::{location::Scope, Node};

use super::ApiQuery;

/// Queries location [`Node`]s listed in a [`Scope`].
pub type InScope = ApiQuery<By<Vec<Node>, Scope>>;
