//! Adapters at the edges of the crate: input-file loaders and the text menu.

pub mod json;
pub mod menu;
