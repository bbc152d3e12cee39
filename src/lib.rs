#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod common;
mod config;
mod grid;
mod snapshot;
mod tile;
#[cfg(feature = "std")]
mod controller;
#[cfg(feature = "std")]
mod input;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod storage;
#[cfg(feature = "std")]
mod view;

pub use common::*;
pub use config::*;
pub use grid::Grid;
pub use snapshot::*;
pub use tile::Tile;
#[cfg(feature = "std")]
pub use controller::{GameController, PlayerScore};
#[cfg(feature = "std")]
pub use input::{parse_input, InputEvent};
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use storage::{FileStorage, MemoryStorage, Storage};
#[cfg(feature = "std")]
pub use view::{TerminalView, View};
