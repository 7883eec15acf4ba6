//! Static configuration of the SPORT serial ports.
//!
//! Each half-SPORT (0A through 7B) has a [`SportConfig`] in [`table`], and a
//! [`RegisterImage`] computed from it at compile time: the CTL, DIV, MCTL and
//! CS0-CS3 values an initialization routine writes verbatim. Which halves
//! exist depends on the [`ChipFamily`]; the build-time choice is
//! [`TARGET_FAMILY`], selected with the `sc57x` cargo feature.

#![no_std]

#[cfg(test)]
extern crate std;

use core::fmt;

pub mod bits;
pub mod config;
pub mod divisor;
pub mod field;
pub mod instance;
pub mod program;
pub mod register;
pub mod table;

pub use config::{channel_select, RegisterImage, SportConfig};
pub use instance::{ChipFamily, Half, Register, SportId, TARGET_FAMILY};
pub use program::{program, program_family, RegisterWrite};
pub use table::{instance, SportInstance, INSTANCES};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Not a half-SPORT name such as "0A" or "SPORT_7B".
    InvalidInstance,
    /// Not a known chip family name.
    UnknownFamily,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInstance => f.write_str("invalid SPORT instance, expected 0A..7B"),
            Error::UnknownFamily => f.write_str("unknown chip family"),
        }
    }
}
