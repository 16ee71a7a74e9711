//! Response sanitization
//!
//! Applied to every bookmark right before it leaves the service. Stored data
//! is never rewritten, so the database keeps what the author submitted.

use super::entities::Bookmark;

/// Escape angle brackets so embedded markup renders as inert text.
///
/// Ampersands are left alone, which keeps the transform idempotent.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Strip scripts, event-handler attributes and other disallowed markup while
/// keeping benign inline formatting
pub fn clean_html(input: &str) -> String {
    ammonia::clean(input)
}

/// Produce the response-safe form of a persisted bookmark
pub fn sanitize_bookmark(bookmark: &Bookmark) -> Bookmark {
    Bookmark {
        id: bookmark.id,
        title: escape_html(&bookmark.title),
        url: escape_html(&bookmark.url),
        description: clean_html(&bookmark.description),
        rating: bookmark.rating,
    }
}
