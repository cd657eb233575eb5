//! Core types for the vyuha maze library.
//!
//! This module provides the fundamental types used throughout the crate:
//! - [`Cell`]: one grid position
//! - [`Orientation`] and [`TurnDirection`]: compass facing and rotation
//! - [`RunnerState`]: immutable runner position + orientation with pure
//!   transition operations

mod cell;
mod orientation;
mod runner;

pub use cell::Cell;
pub use orientation::{Orientation, TurnDirection};
pub use runner::{RelativeWalls, RunnerState};
