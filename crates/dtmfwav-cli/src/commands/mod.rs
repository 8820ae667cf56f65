//! CLI command implementations

pub mod encode;
pub mod inspect;
pub mod json_output;
pub mod tones;
