/*!
 * Primitive constraint checks shared by every template type.
 *
 * Each check returns `Ok(())` or a human-readable reason. Callers attach the
 * field path and violation kind.
 */

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// International phone-number grammar.
///
/// Optional leading `+`, a 1-4 digit country prefix, an optionally
/// parenthesized 1-3 digit area code, then three digit groups. Groups may be
/// separated by a single space, hyphen or dot. Digits are ASCII only.
pub const PHONE_NUMBER_PATTERN: &str =
    r"^\+?[0-9]{1,4}[-.\s]?\(?[0-9]{1,3}\)?[-.\s]?[0-9]{1,4}[-.\s]?[0-9]{1,4}[-.\s]?[0-9]{1,9}$";

static PHONE_NUMBER_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(PHONE_NUMBER_PATTERN).ok());

const URL_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

/// Check that `value` is an absolute http(s) or ftp URL with a host
pub fn is_url(value: &str) -> Result<(), String> {
    let parsed = Url::parse(value).map_err(|e| format!("invalid url: {}", e))?;

    if !URL_SCHEMES.contains(&parsed.scheme()) {
        return Err(format!("unsupported url scheme '{}'", parsed.scheme()));
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err("url has no host".to_string()),
    }
}

/// Check that `value` has at most `max` characters
pub fn max_length(value: &str, max: usize) -> Result<(), String> {
    let length = value.chars().count();
    if length > max {
        return Err(format!("String is too long ({} > {})", length, max));
    }
    Ok(())
}

/// Check that `value` contains fewer than `limit` newline characters.
///
/// A limit of 1 keeps the value on a single line, a limit of 2 allows one
/// line break.
pub fn max_newlines(value: &str, limit: usize) -> Result<(), String> {
    let newlines = value.matches('\n').count();
    if newlines >= limit {
        return Err(format!(
            "String has {} line break(s), at most {} line(s) allowed",
            newlines, limit
        ));
    }
    Ok(())
}

/// Check `value` against [`PHONE_NUMBER_PATTERN`]
pub fn is_phone_number(value: &str) -> Result<(), String> {
    let regex = PHONE_NUMBER_REGEX
        .as_ref()
        .ok_or_else(|| "phone number pattern failed to compile".to_string())?;

    if !regex.is_match(value) {
        return Err("String is not an international phone number".to_string());
    }
    Ok(())
}

/// Check that an array length lies within `[min, max]`
pub fn bounded_array(len: usize, min: usize, max: usize) -> Result<(), String> {
    if len < min {
        return Err(format!("Array has too few items ({} < {})", len, min));
    }
    if len > max {
        return Err(format!("Array has too many items ({} > {})", len, max));
    }
    Ok(())
}
