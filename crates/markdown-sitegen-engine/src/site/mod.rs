//! # Site Generation
//!
//! Turns a tree of Markdown files into HTML pages.
//!
//! - **`page`**: pure per-page steps (title extraction, template
//!   substitution, base path rewriting)
//! - **`generate`**: reading sources and writing pages to disk

pub mod generate;
pub mod page;

use std::path::PathBuf;

use crate::io::IoError;

pub use generate::{generate_page, generate_pages_recursive};
pub use page::{PageError, apply_template, extract_title, render_page, rewrite_base_path};

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Failed to generate page from {path}: {source}")]
    Page { path: PathBuf, source: PageError },
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("Path {path} is not inside {root}")]
    InvalidPath { path: PathBuf, root: PathBuf },
}
