//! HTML text helpers.
//!
//! - `escape_text()`, `escape_attr()` - serializer-side escaping
//! - `decode_entities()` - character reference decoding for parsed text
//! - `is_void_element()`, `is_raw_text_element()` - element classes
//! - `opening_tag_attrs()`, `parse_attributes()` - attributes in source order

use std::borrow::Cow;

// =============================================================================
// Escaping
// =============================================================================

/// Escape text content. Only `&`, `<` and `>` are significant there.
#[inline]
pub fn escape_text(s: &str) -> Cow<'_, str> {
    escape_with(s, |c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        _ => None,
    })
}

/// Escape a double-quoted attribute value.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, |c| match c {
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        _ => None,
    })
}

fn escape_with(s: &str, entity: impl Fn(char) -> Option<&'static str>) -> Cow<'_, str> {
    let Some(first) = s.find(|c| entity(c).is_some()) else {
        return Cow::Borrowed(s);
    };

    let mut out = String::with_capacity(s.len() + 8);
    out.push_str(&s[..first]);
    for c in s[first..].chars() {
        match entity(c) {
            Some(e) => out.push_str(e),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

// =============================================================================
// Decoding
// =============================================================================

/// Longest entity name we try to match before giving up.
const MAX_ENTITY_LEN: usize = 10;

/// Decode character references (`&amp;`, `&#215;`, `&#xD7;`, common named ones).
///
/// Unknown or unterminated references are kept verbatim.
pub fn decode_entities(s: &str) -> Cow<'_, str> {
    if !s.contains('&') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp + 1..];

        let decoded = tail
            .find(';')
            .filter(|&end| end > 0 && end <= MAX_ENTITY_LEN)
            .and_then(|end| decode_reference(&tail[..end]).map(|c| (c, end)));

        match decoded {
            Some((c, end)) => {
                out.push(c);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    Cow::Owned(out)
}

fn decode_reference(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse().ok()?,
        };
        return char::from_u32(code);
    }

    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{00A0}',
        "times" => '×',
        "divide" => '÷',
        "middot" => '·',
        "hellip" => '…',
        "ndash" => '–',
        "mdash" => '—',
        "larr" => '←',
        "rarr" => '→',
        "uarr" => '↑',
        "darr" => '↓',
        "laquo" => '«',
        "raquo" => '»',
        "copy" => '©',
        "reg" => '®',
        "sect" => '§',
        "para" => '¶',
        "dagger" => '†',
        "Dagger" => '‡',
        "bull" => '•',
        _ => return None,
    };
    Some(c)
}

// =============================================================================
// Element Classification
// =============================================================================

/// Void elements never have children and are rendered without a closing tag.
#[inline]
pub fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Raw text elements: their content is emitted without escaping.
#[inline]
pub fn is_raw_text_element(tag: &str) -> bool {
    matches!(tag, "script" | "style")
}

// =============================================================================
// Attribute Parsing
// =============================================================================

/// Attribute span of the opening tag at the start of `raw`.
///
/// Input: `<a href="/x" title='a > b'>text</a>`
/// Output: ` href="/x" title='a > b'`
pub fn opening_tag_attrs(raw: &str) -> &str {
    let body = raw.strip_prefix('<').unwrap_or(raw);
    let name_end = body
        .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
        .unwrap_or(body.len());
    let rest = &body[name_end..];

    let mut quote = None;
    for (i, c) in rest.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == '>' => return strip_self_closing(&rest[..i]),
            None => {}
        }
    }
    strip_self_closing(rest)
}

/// Drop a trailing `/` that closes the tag rather than ending an unquoted value.
fn strip_self_closing(s: &str) -> &str {
    let trimmed = s.trim_end();
    match trimmed.strip_suffix('/') {
        Some(head)
            if head.is_empty()
                || head.ends_with(|c: char| c.is_whitespace() || c == '"' || c == '\'') =>
        {
            head.trim_end()
        }
        _ => trimmed,
    }
}

/// Parse HTML-style attributes from a string, keeping source order.
///
/// Input: `href="/x" class='a b' hidden`
/// Output: `vec![("href", Some("/x")), ("class", Some("a b")), ("hidden", None)]`
///
/// Values are returned raw; character references are left for the caller.
pub fn parse_attributes(s: &str) -> Vec<(String, Option<String>)> {
    let mut attrs = Vec::new();
    let mut chars = s.chars().peekable();
    let skip_whitespace = |chars: &mut std::iter::Peekable<std::str::Chars<'_>>| {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
    };

    while let Some(c) = chars.next() {
        if c.is_whitespace() || c == '/' {
            continue;
        }

        let mut name = String::from(c);
        while let Some(next) = chars.next_if(|&n| n != '=' && !n.is_whitespace()) {
            name.push(next);
        }

        skip_whitespace(&mut chars);
        if chars.next_if_eq(&'=').is_none() {
            attrs.push((name, None));
            continue;
        }
        skip_whitespace(&mut chars);

        let mut value = String::new();
        match chars.next_if(|&q| q == '"' || q == '\'') {
            Some(quote) => {
                for c in chars.by_ref() {
                    if c == quote {
                        break;
                    }
                    value.push(c);
                }
            }
            None => {
                while let Some(c) = chars.next_if(|c| !c.is_whitespace()) {
                    value.push(c);
                }
            }
        }
        attrs.push((name, Some(value)));
    }

    attrs
}
