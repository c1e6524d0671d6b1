//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Delimiter`**: symmetric open/close markers: `BOLD` (`**`),
//!   `ITALIC` (`_`), `CODE` (`` ` ``)
//! - **`Bracket`**: `prefix[label](url)` syntax: `IMAGE` (`![`), `LINK` (`[`)
//!
//! All delimiter constants live here. The parser never hardcodes `**` or `[`.

pub mod bracket;
pub mod delimiter;

pub use bracket::Bracket;
pub use delimiter::Delimiter;
