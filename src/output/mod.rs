//! Output module for console output and prompts.
//!
//! Provides:
//! - Colored console output
//! - Selection tree rendering
//! - Terminal confirmation prompt
//! - Outcome reporting and plan files
//! - Progress spinner

pub mod console;
pub mod outcome;
pub mod progress;
pub mod prompt;
pub mod tree_view;

pub use self::console::{
    print_banner, print_catalog_summary, print_error, print_info, print_success, print_warning,
};
pub use outcome::{print_outcome, write_plan};
pub use progress::create_spinner;
pub use prompt::ConsolePrompt;
pub use tree_view::{format_duration, print_tree, render_tree};
