#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod connection;
mod game;
#[cfg(feature = "std")]
mod logging;
mod protocol;
#[cfg(feature = "std")]
pub mod sync;
#[cfg(feature = "std")]
pub mod transport;
#[cfg(feature = "std")]
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use connection::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use protocol::*;
#[cfg(feature = "std")]
pub use sync::*;
