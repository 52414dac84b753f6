//! Check lifecycle management.
//!
//! This module implements the state machines for received and issued checks:
//! status transitions with a cascading location for received checks, a
//! permitted-action table for issued checks, and terminal immutability for
//! both.
//!
//! # Modules
//!
//! - `types` - Check entities, status/location/action enums, field updates
//! - `error` - Check-specific error types
//! - `service` - Transition and edit logic

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::InstrumentError;
pub use service::InstrumentService;
pub use types::{
    CheckLocation, IssuedCheck, IssuedCheckAction, IssuedCheckStatus, IssuedCheckUpdate,
    ReceivedCheck, ReceivedCheckStatus, ReceivedCheckUpdate,
};
