pub mod config;
pub mod domain;
pub mod error;
pub mod host;
pub mod initial;
pub mod manifest;
pub mod promote;
pub mod reconciler;
pub mod ui;

pub use error::{ReleaseGateError, Result};
