//! Layout engine
//!
//! Maps a [`ProductBrief`](crate::brief::ProductBrief) onto canvas driver
//! calls. Everything here is synchronous arithmetic over the brief; the only
//! side effects go through the driver.

pub mod document;
pub mod grid;
pub mod painter;
pub mod sections;
pub mod style;
pub mod text;

pub use document::{generate_document, DocumentLayout, SectionSummary};
pub use grid::{layout_section, CardPlacement, GridLayout, GridSpec};
pub use painter::{FontPreference, Painter};
pub use sections::SectionKind;
