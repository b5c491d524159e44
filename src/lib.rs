//! Workspace facade: re-exports [`locpage_core`] so the demos can use
//! `locpage_rs::prelude::*`.

pub use locpage_core::*;
