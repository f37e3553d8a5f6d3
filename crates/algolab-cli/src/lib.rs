//! # algolab-cli
//!
//! CLI output, Big-O commentary, and shell completion.

pub mod commentary;
pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::CliResultPresenter;
