//! Query string helpers shared by the URL builders

use domain::GeoLocation;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Bytes escaped in free-text query values
///
/// Everything that is not legal in a URL, plus the RFC 3986 reserved
/// characters `!*'();:@&=+$,/?%#[]`. Non-ASCII input is always escaped as UTF-8.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    // not legal in a URL
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}')
    // reserved
    .add(b'!')
    .add(b'*')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b';')
    .add(b':')
    .add(b'@')
    .add(b'&')
    .add(b'=')
    .add(b'+')
    .add(b'$')
    .add(b',')
    .add(b'/')
    .add(b'?')
    .add(b'%')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a free-text value for use inside a query parameter
#[must_use]
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Format a coordinate as `lat,lon` with the shortest exact decimal form
#[must_use]
pub fn coordinate_pair(location: GeoLocation) -> String {
    format!("{},{}", location.latitude(), location.longitude())
}

/// Join already-encoded parameters as `key=value` pairs separated by `&`
#[must_use]
pub fn query_string(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}
