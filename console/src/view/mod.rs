//! Observable view state.
//!
//! Every mutation of a view bumps its revision, published through a
//! [`watch`] channel, so subscribers know when to re-render.
//!
//! [`watch`]: tokio::sync::watch

pub mod cascade;
pub mod list;

pub use self::{cascade::Cascade, list::List};
