//! QHelper - drop an archive, get the project open
//!
//! Expands a `.zip` or `.rar` next to itself into a fresh folder, finds the
//! solution or project file inside and opens it with the default program.

pub mod app;
pub mod archive;
pub mod config;
pub mod destination;
pub mod launcher;
pub mod locator;
