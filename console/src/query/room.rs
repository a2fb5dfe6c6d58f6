//! [`Query`] collection related to [`Room`]s.

use common::operations::By;

#[cfg(doc)]
use crate::{domain::Room, Query};
use crate::domain::room;

use super::ApiQuery;

/// Queries every [`room::Type`] a [`Room`] may be of.
pub type Types = ApiQuery<By<Vec<room::Type>, ()>>;
