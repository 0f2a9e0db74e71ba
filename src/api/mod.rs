//! API Module - Commands for the Presentation Shell

pub mod commands;
