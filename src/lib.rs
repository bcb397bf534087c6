//! userflow: registration, login and settings flow driven from a terminal.

pub mod bootstrap;
pub mod shell;
