//! # HTML Element Tree
//!
//! - **`node`**: `ElementNode`, a leaf-or-parent sum type with attributes
//! - **`render`**: `render_html`, which checks each node's structural
//!   invariants as it serializes

pub mod error;
pub mod node;
pub mod render;

pub use error::RenderError;
pub use node::{Attributes, ElementNode};
pub use render::render_html;
