//! bili-picker - browse Bilibili media and pick what to download
//!
//! This library turns the metadata of a video, series, live room or audio
//! track into a checkbox tree, keeps group and item check states consistent
//! as the user clicks, and resolves the checked rows into download entries.
//!
//! # Features
//!
//! - Multi-part videos and collections
//! - Series with optional extra sections (PVs, extras)
//! - Live rooms and audio tracks
//! - Tri-state group checkboxes (checked, unchecked, partial)
//! - Member-only content detection with a confirmation step
//! - Saved catalog files for offline selection
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use bili_picker::{catalog::load_catalog, AutoConfirm, Resolution, SelectionSession};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = load_catalog(Path::new("catalog.json"))?;
//!     let mut session = SelectionSession::new(catalog, true);
//!
//!     session.on_group_toggled("PV");
//!     session.on_leaf_toggled("正片", "2");
//!
//!     if let Resolution::Proceed(outcome) = session.resolve(false, &mut AutoConfirm(true))? {
//!         println!("{} item(s) selected", outcome.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod selection;

// Re-exports for convenience
pub use api::{parse_target, BiliApi, Target};
pub use catalog::{Catalog, Domain, DownloadEntry, MetadataSource};
pub use config::Config;
pub use error::{Error, Result};
pub use selection::{
    AutoConfirm, CheckState, ConfirmPrompt, Resolution, SelectionError, SelectionOutcome,
    SelectionSession, SelectionTree,
};
