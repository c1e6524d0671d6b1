//! Markdown to HTML conversion for static sites.
//!
//! A document is segmented into blocks, each block is classified and its
//! text scanned into inline spans, the results are folded into an element
//! tree under a single root `div`, and the tree is rendered to HTML.
//!
//! ```
//! use markdown_sitegen_engine::markdown_to_html;
//!
//! let html = markdown_to_html("# Title\n\nSome **bold** text").unwrap();
//! assert_eq!(html, "<div><h1>Title</h1><p>Some <b>bold</b> text</p></div>");
//! ```
//!
//! Every conversion is a pure function of its input; independent documents
//! can be converted on separate threads.

pub mod convert;
pub mod html;
pub mod io;
pub mod parsing;
pub mod site;

// Re-export key types for easier usage
pub use convert::{ConvertError, markdown_to_element_tree, markdown_to_html};
pub use html::{Attributes, ElementNode, RenderError, render_html};
pub use io::IoError;
pub use parsing::{
    ParseError,
    blocks::{Block, BlockKind, classify_block, markdown_to_blocks},
    inline::{InlineKind, InlineSpan, scan_inline},
};
pub use site::{SiteError, generate_page, generate_pages_recursive};
