#![forbid(unsafe_code)]

//! # briefcanvas
//!
//! Turns a free-text product idea into a structured product brief and lays
//! that brief out as a design-system document on a canvas.
//!
//! ## Features
//!
//! - **Lenient briefs**: missing or malformed fields degrade to placeholders
//! - **Palette derivation**: light/dark palettes and a type scale from tokens
//! - **Dynamic layout**: cards wrap into rows and containers grow to fit
//! - **Pluggable canvas**: any [`CanvasDriver`]; a recording canvas and SVG
//!   export ship with the crate
//!
//! ## Example
//!
//! ```rust,no_run
//! use briefcanvas::{generate_document, load_brief, FontPreference, RecordingCanvas};
//!
//! fn main() -> anyhow::Result<()> {
//!     let brief = load_brief("brief.json")?;
//!     let mut canvas = RecordingCanvas::new();
//!     let layout = generate_document(&brief, &mut canvas, &FontPreference::default())?;
//!
//!     let document = canvas.to_document(layout.root)?;
//!     std::fs::write("design-system.json", serde_json::to_string_pretty(&document)?)?;
//!     Ok(())
//! }
//! ```

pub mod brief;
pub mod canvas;
pub mod color;
pub mod commands;
pub mod config;
pub mod error;
pub mod layout;
pub mod llm;
pub mod session;
pub mod store;

// Re-exports
pub use brief::{load_brief, parse_brief, ProductBrief};
pub use canvas::{render_svg, CanvasDriver, NodeId, RecordedDocument, RecordingCanvas};
pub use color::{derive_palette, derive_typography_scale, Palette, TypographyScale};
pub use config::Config;
pub use error::{BriefError, Result};
pub use layout::{generate_document, DocumentLayout, FontPreference, SectionKind};
pub use llm::BriefClient;
pub use session::{Request, Response, Session};
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
