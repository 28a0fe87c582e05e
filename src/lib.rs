//! Laboratory logbook for the cocoa pod borer (*Conopomorpha cramerella*)
//! genome assembly and annotation workflow.
//!
//! The logbook is documentation only: it renders the commands to run and
//! serves the helper scripts for download, but never executes anything.

pub mod api;
pub mod assets;
pub mod client;
pub mod config;
pub mod content;
pub mod error;
pub mod models;
pub mod nav;
pub mod render;
