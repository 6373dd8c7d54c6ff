//! CLI command implementations
//!
//! One submodule per subcommand. Handlers return `anyhow::Result` and print
//! with `console` styling; library errors are converted at this boundary.

pub mod generate;
pub mod init;
pub mod key;
pub mod layout;
pub mod output;
pub mod palette;

pub use generate::{execute_generate, GenerateOptions};
pub use init::{execute_init, InitOptions};
pub use key::{execute_key, KeySubcommand};
pub use layout::{execute_layout, LayoutOptions};
pub use output::{print_summary, render_and_write, OutputOptions};
pub use palette::{execute_palette, PaletteOptions};
