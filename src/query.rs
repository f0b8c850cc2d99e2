//! Query-string reader for explicit locale overrides.

use crate::error::PortError;
use crate::ports::QuerySource;

/// What: Parsed `application/x-www-form-urlencoded` query string.
///
/// Details:
/// - Accepts input with or without the leading `?`, and a full URL
/// - The first occurrence of a parameter wins
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    /// What: Parse a raw query string such as `?lang=ja-JP&theme=dark`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let query = raw.split_once('?').map_or(raw, |(_, q)| q);
        let query = query.split_once('#').map_or(query, |(q, _)| q);
        let pairs = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (percent_decode(key), percent_decode(value))
            })
            .collect();
        Self { pairs }
    }

    /// What: Value of the first parameter called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl QuerySource for QueryString {
    fn param(&self, name: &str) -> Result<Option<String>, PortError> {
        Ok(self.get(name).map(ToString::to_string))
    }
}

/// What: Decode `%XX` escapes and `+` as space.
///
/// Details:
/// - Malformed escapes are kept literally
/// - Invalid UTF-8 is replaced lossily
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit() =>
            {
                out.push(hex_value(bytes[i + 1]) << 4 | hex_value(bytes[i + 2]));
                i += 3;
                continue;
            }
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Value of an ASCII hex digit; callers check `is_ascii_hexdigit` first.
const fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}
