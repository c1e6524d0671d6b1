use crate::parsing::error::ParseError;

use super::{
    cursor::Cursor,
    kinds::{Bracket, Delimiter},
    types::InlineSpan,
};

/// One pass of the inline pipeline. Each pass only splits the `Text` spans
/// left over by earlier passes; styled spans are never re-scanned.
#[derive(Debug, Clone, Copy)]
enum Stage {
    Bracketed(Bracket),
    Delimited(Delimiter),
}

/// Inline pipeline, in order.
///
/// 1. Images before links: `![a](b)` contains the link syntax `[a](b)`.
/// 2. Links before delimiters: `_` and `**` inside URLs stay literal.
/// 3. Bold before italic.
/// 4. Code last.
const STAGES: [Stage; 5] = [
    Stage::Bracketed(Bracket::IMAGE),
    Stage::Bracketed(Bracket::LINK),
    Stage::Delimited(Delimiter::BOLD),
    Stage::Delimited(Delimiter::ITALIC),
    Stage::Delimited(Delimiter::CODE),
];

/// Scans a run of block text into a sequence of [`InlineSpan`]s.
///
/// Output mirrors the left-to-right order of the source. Zero-length text
/// spans are never emitted.
///
/// # Errors
/// [`ParseError::MalformedInlineSyntax`] when a bold, italic or code marker
/// opens without a matching close, or a marker pair encloses nothing.
pub fn scan_inline(text: &str) -> Result<Vec<InlineSpan>, ParseError> {
    let mut spans = vec![InlineSpan::Text(text.to_string())];
    for stage in STAGES {
        spans = apply_stage(spans, stage)?;
    }
    Ok(spans)
}

fn apply_stage(spans: Vec<InlineSpan>, stage: Stage) -> Result<Vec<InlineSpan>, ParseError> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        match span {
            InlineSpan::Text(text) => match stage {
                Stage::Bracketed(bracket) => split_bracketed(&text, bracket, &mut out),
                Stage::Delimited(delimiter) => split_delimited(&text, delimiter, &mut out)?,
            },
            styled => out.push(styled),
        }
    }
    Ok(out)
}

fn flush_text(out: &mut Vec<InlineSpan>, text: &str) {
    if !text.is_empty() {
        out.push(InlineSpan::Text(text.to_string()));
    }
}

/// Splits `text` into alternating plain/delimited segments. An even number
/// of markers is required.
fn split_delimited(
    text: &str,
    delimiter: Delimiter,
    out: &mut Vec<InlineSpan>,
) -> Result<(), ParseError> {
    let marker = delimiter.marker.as_bytes();
    let malformed = || ParseError::MalformedInlineSyntax {
        delimiter: delimiter.marker,
        text: text.to_string(),
    };

    let mut cur = Cursor::new(text);
    let mut segment_start = 0;
    let mut inside = false;

    while let Some(at) = cur.seek(marker) {
        let segment = cur.slice(segment_start, at);
        if inside {
            if segment.is_empty() {
                return Err(malformed());
            }
            out.push(delimiter.wrap(segment));
        } else {
            flush_text(out, segment);
        }
        inside = !inside;
        cur.bump_n(marker.len());
        segment_start = cur.pos();
    }

    if inside {
        return Err(malformed());
    }
    flush_text(out, cur.slice(segment_start, text.len()));
    Ok(())
}

/// Extracts every `prefix[label](url)` match from `text`, keeping the text
/// around each match in place.
fn split_bracketed(text: &str, bracket: Bracket, out: &mut Vec<InlineSpan>) {
    let mut cur = Cursor::new(text);
    let mut text_start = 0;

    while !cur.eof() {
        let start = cur.pos();
        if let Some((label, url)) = try_parse_bracketed(&mut cur, bracket) {
            flush_text(out, cur.slice(text_start, start));
            out.push(bracket.wrap(label, url));
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    flush_text(out, cur.slice(text_start, text.len()));
}

/// Attempts to parse `prefix[label](url)` at the current position.
///
/// Returns `None` if the syntax isn't complete; the cursor is restored.
fn try_parse_bracketed<'a>(cur: &mut Cursor<'a>, bracket: Bracket) -> Option<(&'a str, &'a str)> {
    if !cur.starts_with(bracket.prefix.as_bytes()) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(bracket.prefix.len());
    let label_start = cur.pos();

    let parsed = scan_label_and_url(cur);

    match parsed {
        Some((label_end, url_start, url_end)) => Some((
            cur.slice(label_start, label_end),
            cur.slice(url_start, url_end),
        )),
        None => {
            *cur = saved;
            None
        }
    }
}

/// Byte positions `(label_end, url_start, url_end)` of `label](url)`.
fn scan_label_and_url(cur: &mut Cursor<'_>) -> Option<(usize, usize, usize)> {
    let label_end = cur.seek(Bracket::LABEL_END)?;
    if !cur.starts_with(Bracket::LABEL_CLOSE) {
        return None;
    }
    cur.bump_n(Bracket::LABEL_CLOSE.len());
    let url_start = cur.pos();
    let url_end = cur.seek(Bracket::URL_CLOSE)?;
    cur.bump_n(Bracket::URL_CLOSE.len());
    Some((label_end, url_start, url_end))
}
