#[macro_use]
extern crate lazy_static;

pub mod cli;
pub mod dictionary;
pub mod gallows;
pub mod game;
pub mod screen;
