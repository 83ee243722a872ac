//! The description is the configuration tree handed over by the application
//! layer: sources, ads, text tracks, and metadata.
//!
//! This module normalizes that tree and resolves it into the typed model
//! consumed by the playback engine. Resolution is synchronous, bounded by
//! the size of the input, and free of shared state; resolving the same tree
//! twice yields independent results.

mod ads;
mod content_type;
mod drm;
mod metadata;
mod root;
mod sanitize;
mod source;
mod ssai;
mod text_track;

pub use ads::*;
pub use content_type::*;
pub use drm::*;
pub use metadata::*;
pub use root::*;
pub use sanitize::*;
pub use source::*;
pub use ssai::*;
pub use text_track::*;
