//! Bookmark domain model, input validation and output sanitization

pub mod entities;
pub mod sanitize;
pub mod validation;
