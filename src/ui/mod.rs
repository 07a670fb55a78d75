//! UI module - cards, section headers and charts
//!
//! Pages in `app` compose these pieces; nothing here holds state.

pub mod charts;
pub mod components;
