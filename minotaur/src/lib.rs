//! Minotaur — maze generation and rendering for the command-line front end.

pub mod mazegen;
pub mod render;
