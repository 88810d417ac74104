#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod common;
mod config;
mod game;
mod mission;
#[cfg(feature = "std")]
mod cli;
#[cfg(feature = "std")]
mod logging;

pub use common::*;
pub use config::*;
pub use game::*;
pub use mission::*;
#[cfg(feature = "std")]
pub use cli::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
