//! dtmfwav CLI library.
//!
//! Argument handling, parameter resolution, logging setup and the command
//! implementations behind the `dtmfwav` binary.

pub mod commands;
pub mod input;
pub mod logging;
