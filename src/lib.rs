#![allow(clippy::new_without_default, clippy::collapsible_if)]
pub mod board;
pub mod check;
pub mod coord;
pub mod piece;
pub mod player;
