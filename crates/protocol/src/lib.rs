//! Wire-level protocol data for WebDriver-family automation servers.
//!
//! This crate contains the static command descriptor tables for the four
//! supported dialects and the capability payload shapes used during session
//! negotiation. These represent the "protocol layer" - the shapes of
//! commands and data as they appear on the wire.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! - **Pure data**: No behavior beyond serialization and simple lookups
//! - **1:1 with protocol**: Match the published command endpoints
//! - **Stable**: Changes only when the wire protocol changes
//!
//! Session state, request execution, and the generated command surface are
//! built on top of these tables in `wd-runtime` and `wd-rs`.

pub mod appium;
pub mod capabilities;
pub mod descriptor;
pub mod jsonwp;
pub mod mjsonwp;
pub mod registry;
pub mod webdriver;

pub use capabilities::{RequestedCapabilities, W3cCapabilities};
pub use descriptor::{CommandDescriptor, Dialect, HttpVerb, Param, ParamKind};
