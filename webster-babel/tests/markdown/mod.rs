//! Markdown note tests
//!
//! Tests for entry → note rendering.

mod export;
mod frontmatter;
