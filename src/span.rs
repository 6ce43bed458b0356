//! Conversions between located spans and token positions.

use crate::node::Position;
use crate::result::Span;

/// Position of the first byte of `span`. Columns are 0-based UTF-8 byte
/// offsets into the line.
pub fn point(span: &Span) -> Position {
    Position::new(
        span.location_line() as usize,
        span.get_column().saturating_sub(1),
    )
}

/// Position right after `text` when it starts at `start`.
///
/// A trailing line break stays on its own line, so a newline token ends one
/// column past where it starts.
pub fn end_of(start: Position, text: &str) -> Position {
    let body = text.trim_end_matches(['\r', '\n']);
    match body.rfind('\n') {
        Some(last) => Position::new(
            start.line + body.matches('\n').count(),
            text.len() - last - 1,
        ),
        None => Position::new(start.line, start.column + text.len()),
    }
}
