pub mod boundary;
pub mod cli;
pub mod config;
pub mod credentials;
pub mod dispatcher;
pub mod domain;
pub mod error;
pub mod git;
pub mod trigger;
pub mod ui;

pub use error::{DispatchError, Result};
