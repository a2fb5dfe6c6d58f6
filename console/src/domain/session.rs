//! [`Session`] definitions.

use std::fmt;

use derive_more::{AsRef, From, FromStr};
use secrecy::{zeroize::Zeroize, CloneableSecret, ExposeSecret as _, SecretBox};

/// Authenticated session of a console operator.
///
/// Issued outside of this crate and handed to the remote API on
/// construction.
#[derive(Clone, Debug)]
pub struct Session {
    /// Access [`Token`] of this [`Session`].
    token: SecretBox<Token>,
}

impl Session {
    /// Creates a new [`Session`] out of the provided access [`Token`].
    #[must_use]
    pub fn new(token: impl Into<Token>) -> Self {
        Self {
            token: SecretBox::new(Box::new(token.into())),
        }
    }

    /// Returns the value of the `Authorization` HTTP header authenticating
    /// requests of this [`Session`].
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token.expose_secret().0)
    }
}

/// Access token of a [`Session`].
#[derive(AsRef, Clone, From, FromStr)]
#[as_ref(str)]
#[from(&str, String)]
pub struct Token(String);

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token([REDACTED])")
    }
}

impl CloneableSecret for Token {}
impl Zeroize for Token {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
