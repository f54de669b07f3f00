//! # rotbench-cli
//!
//! Terminal prompts, result presentation, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod prompt;
pub mod ui;

pub use presenter::CLIResultPresenter;
pub use prompt::Prompter;
