//! Decoding of NVP (name/value pair) response bodies.
//!
//! PayPal answers Express Checkout calls with an
//! `application/x-www-form-urlencoded` body such as
//! `TOKEN=EC%2d123&TIMESTAMP=2024%2d01%2d01T00%3a00%3a00Z&ACK=Success`.

use std::collections::HashMap;

use url::form_urlencoded;

/// Decode an NVP body into a map keyed by uppercase parameter name.
///
/// Decoding never fails:
/// - pairs may be separated by `&` or `;`
/// - `+` decodes to a space, `%XX` to the escaped byte (invalid UTF-8 is replaced)
/// - a segment with an empty name is skipped
/// - a segment without `=` yields an empty value
/// - when a name repeats, the last value wins
pub fn decode_nvp(body: &str) -> HashMap<String, String> {
    let mut parameters = HashMap::new();

    for segment in body.split(|c| c == '&' || c == ';') {
        if segment.is_empty() {
            continue;
        }

        // A segment holds no separators, so it decodes to at most one pair.
        let Some((name, value)) = form_urlencoded::parse(segment.as_bytes()).next() else {
            continue;
        };

        if name.is_empty() {
            continue;
        }

        parameters.insert(normalize_name(&name), value.into_owned());
    }

    parameters
}

/// Normalize a parameter name for storage and lookup.
pub fn normalize_name(name: &str) -> String {
    name.to_ascii_uppercase()
}
