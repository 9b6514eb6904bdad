use std::borrow::Cow;

use crate::error::Error;

pub(crate) fn parse_entities(content: &str) -> Result<Cow<str>, Error> {
    if !content.contains('&') {
        return Ok(content.into());
    }
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c != '&' {
            result.push(c);
            continue;
        }
        let mut entity = String::new();
        let mut is_complete = false;
        for c in chars.by_ref() {
            if c == ';' {
                is_complete = true;
                break;
            }
            entity.push(c);
        }
        if !is_complete {
            return Err(Error::UnclosedEntity(entity));
        }
        match entity.as_str() {
            "amp" => result.push('&'),
            "apos" => result.push('\''),
            "gt" => result.push('>'),
            "lt" => result.push('<'),
            "quot" => result.push('"'),
            _ => result.push(parse_character_reference(&entity)?),
        }
    }
    Ok(result.into())
}

fn parse_character_reference(entity: &str) -> Result<char, Error> {
    let code = if let Some(hex) = entity
        .strip_prefix("#x")
        .or_else(|| entity.strip_prefix("#X"))
    {
        u32::from_str_radix(hex, 16).ok()
    } else if let Some(decimal) = entity.strip_prefix('#') {
        decimal.parse::<u32>().ok()
    } else {
        None
    };
    code.and_then(char::from_u32)
        .ok_or_else(|| Error::InvalidEntity(entity.to_string()))
}

fn escape<'a>(content: &'a str, escape_quote: bool) -> Cow<'a, str> {
    let needs_escape = |c: char| matches!(c, '&' | '<' | '>') || (escape_quote && c == '"');
    if !content.contains(needs_escape) {
        return content.into();
    }
    let mut result = String::with_capacity(content.len() + 8);
    for c in content.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' if escape_quote => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result.into()
}

/// Escape text content: only `&`, `<` and `>` are replaced.
pub(crate) fn serialize_text(content: &str) -> Cow<str> {
    escape(content, false)
}

/// Escape an attribute value written between double quotes.
pub(crate) fn serialize_attribute(content: &str) -> Cow<str> {
    escape(content, true)
}
