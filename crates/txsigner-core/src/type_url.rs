//! Type URL conventions: package paths and exported symbol names.
//!
//! A type URL looks like `/cosmos.bank.v1beta1.MsgSend`. Its last dot
//! separated segment is the message name; everything before it is the
//! package path (`/cosmos.bank.v1beta1`), which is what an extension module
//! is looked up by.

use std::collections::BTreeSet;

use crate::codec::CodecError;

pub const PATH_SEPARATOR: char = '/';
pub const SEGMENT_SEPARATOR: char = '.';
pub const SYMBOL_SEPARATOR: &str = "_";

/// Package path of a type URL, leading `/` preserved.
///
/// Returns an empty string when the URL has no package.
pub fn package_path(type_url: &str) -> &str {
    match type_url.rfind(SEGMENT_SEPARATOR) {
        Some(idx) => &type_url[..idx],
        None => "",
    }
}

/// Message name of a type URL (its last segment).
pub fn message_name(type_url: &str) -> &str {
    match type_url.rfind(SEGMENT_SEPARATOR) {
        Some(idx) => &type_url[idx + 1..],
        None => type_url.trim_start_matches(PATH_SEPARATOR),
    }
}

/// Check that `type_url` is `/segment(.segment)+` with no empty segments.
pub fn validate(type_url: &str) -> Result<(), CodecError> {
    let invalid = || CodecError::InvalidTypeUrl(type_url.to_string());

    let name = type_url.strip_prefix(PATH_SEPARATOR).ok_or_else(invalid)?;
    let mut segments = 0;
    for segment in name.split(SEGMENT_SEPARATOR) {
        if segment.is_empty() || segment.chars().any(|c| c.is_whitespace() || c == PATH_SEPARATOR)
        {
            return Err(invalid());
        }
        segments += 1;
    }
    if segments < 2 {
        return Err(invalid());
    }
    Ok(())
}

/// Distinct package paths for a set of type URLs.
///
/// Type URLs sharing a package collapse to one entry, so each extension
/// module is searched for once.
pub fn lookup_packages<I, S>(type_urls: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    type_urls
        .into_iter()
        .map(|t| package_path(t.as_ref()).to_string())
        .collect()
}

/// Upper-case the first character, leave the rest untouched.
///
/// Characters without a single-character upper case (`ß`) are kept as is.
pub fn capitalize_first_char(s: &str) -> String {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut upper = first.to_uppercase();
    let first = match (upper.next(), upper.next()) {
        (Some(c), None) => c,
        _ => first,
    };
    std::iter::once(first).chain(chars).collect()
}

/// Exported symbol base for a type URL or package path.
///
/// `/cosmos.bank.v1beta1` -> `Cosmos_bank_v1beta1`. Only the first segment
/// is capitalized; later segments keep their case.
pub fn sanitize_symbol_name(type_url: &str) -> String {
    let trimmed = type_url.strip_prefix(PATH_SEPARATOR).unwrap_or(type_url);
    if trimmed.is_empty() {
        return String::new();
    }

    let mut segments = trimmed.split(SEGMENT_SEPARATOR);
    let mut symbol = segments.next().map(capitalize_first_char).unwrap_or_default();
    for segment in segments {
        symbol.push_str(SYMBOL_SEPARATOR);
        symbol.push_str(segment);
    }
    symbol
}
