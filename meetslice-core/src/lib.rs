//! Core types for meetslice.
//!
//! This crate turns a meeting window into back-to-back time slots and renders
//! them as documents:
//! - `config` holds the raw (form-shaped) and typed meeting configuration
//! - `slot` slices the window into `TimeSlot`s
//! - `render` turns a slot list into ICS, CSV or HTML

pub mod config;
pub mod error;
pub mod render;
pub mod slot;
pub mod text;

pub use config::{Configuration, Organizer, RawConfiguration};
pub use error::{Field, SlotError, SlotResult};
pub use render::{Format, IcsDialect, RenderOptions};
pub use slot::{TimeSlot, generate, generate_raw, try_generate};
