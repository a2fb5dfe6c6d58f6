//! [`Error`]-related definitions.

use console::{
    command::{
        add_facility, add_room, check_in_booking, confirm_booking,
        delete_room, register_hotel, select_location, transition_status,
        update_hotel,
    },
    filter, infra::api,
};
use derive_more::{Display, Error as StdError};
use tracerr::Traced;
use tracing as log;

/// Class of an [`Error`], deciding how it's reported.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Class {
    /// Remote call failed or was refused.
    #[display("remote failure")]
    NetworkOrServer,

    /// Input was refused before any remote call.
    #[display("invalid input")]
    Validation,
}

impl Class {
    /// Returns the process exit code of this [`Class`].
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::NetworkOrServer => 1,
            Self::Validation => 2,
        }
    }
}

/// Console [`Error`] reported to the operator.
#[derive(Debug, Display, StdError)]
#[display("{class}: {message}")]
pub struct Error {
    /// [`Class`] of this [`Error`].
    pub class: Class,

    /// Human-readable message of this [`Error`].
    pub message: String,
}

impl Error {
    /// Creates a new [`Class::Validation`] [`Error`].
    #[must_use]
    pub fn validation(msg: &impl ToString) -> Self {
        Self {
            class: Class::Validation,
            message: msg.to_string(),
        }
    }
}

/// Helper trait for classifying errors into [`Error`]s.
pub trait Classify {
    /// Returns the [`Class`] of this error.
    fn class(&self) -> Class;

    /// Converts this error into an [`Error`].
    fn into_error(self) -> Error
    where
        Self: Display + Sized,
    {
        Error {
            class: self.class(),
            message: self.to_string(),
        }
    }
}

impl<E: Classify + Display> Classify for Traced<E> {
    fn class(&self) -> Class {
        self.as_ref().class()
    }

    fn into_error(self) -> Error
    where
        Self: Display + Sized,
    {
        log::debug!("{} at:\n{}", self.as_ref(), self.trace());
        Error {
            class: self.class(),
            message: self.as_ref().to_string(),
        }
    }
}

impl Classify for api::Error {
    fn class(&self) -> Class {
        Class::NetworkOrServer
    }
}

impl Classify for filter::ParseError {
    fn class(&self) -> Class {
        Class::Validation
    }
}

impl Classify for transition_status::ExecutionError {
    fn class(&self) -> Class {
        match self {
            Self::Api(_) => Class::NetworkOrServer,
            Self::Forbidden { .. } => Class::Validation,
        }
    }
}

impl Classify for confirm_booking::ExecutionError {
    fn class(&self) -> Class {
        match self {
            Self::Api(_) | Self::Declined(_) => Class::NetworkOrServer,
        }
    }
}

impl Classify for check_in_booking::ExecutionError {
    fn class(&self) -> Class {
        match self {
            Self::Api(_) => Class::NetworkOrServer,
            Self::EmptyCode => Class::Validation,
        }
    }
}

impl Classify for add_facility::ExecutionError {
    fn class(&self) -> Class {
        match self {
            Self::Api(_) => Class::NetworkOrServer,
            Self::EmptyName => Class::Validation,
        }
    }
}

impl Classify for register_hotel::ExecutionError {
    fn class(&self) -> Class {
        match self {
            Self::Api(_) => Class::NetworkOrServer,
            Self::EmptyName | Self::IncompleteLocation => Class::Validation,
        }
    }
}

impl Classify for update_hotel::ExecutionError {
    fn class(&self) -> Class {
        match self {
            Self::Api(_) => Class::NetworkOrServer,
            Self::EmptyName | Self::IncompleteLocation => Class::Validation,
        }
    }
}

impl Classify for add_room::ExecutionError {
    fn class(&self) -> Class {
        match self {
            Self::Api(_) => Class::NetworkOrServer,
            Self::Invalid(_) => Class::Validation,
        }
    }
}

impl Classify for delete_room::ExecutionError {
    fn class(&self) -> Class {
        match self {
            Self::Api(_) => Class::NetworkOrServer,
        }
    }
}

impl Classify for select_location::ExecutionError {
    fn class(&self) -> Class {
        match self {
            Self::Api(_) => Class::NetworkOrServer,
        }
    }
}
