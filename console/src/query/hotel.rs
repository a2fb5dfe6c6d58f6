//! [`Query`] collection related to a single [`Hotel`].

use common::operations::By;

#[cfg(doc)]
use crate::Query;
use crate::domain::{hotel, Hotel};

use super::ApiQuery;

/// Queries a [`Hotel`] by its [`hotel::Id`].
pub type ById = ApiQuery<By<Hotel, hotel::Id>>;
