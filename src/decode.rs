//! Percent decoding of captured values.

use {std::borrow::Cow, url::percent_encoding::percent_decode};

/// Decodes a captured segment.
///
/// The value is returned as-is (without allocation) when it contains no `'%'`.
/// A literal `'+'` is never interpreted as a space since the captured value is
/// not a part of query string.
pub fn decode(raw: &str) -> Cow<'_, str> {
    decode_flagged(raw, raw.bytes().any(|b| b == b'%'))
}

/// Decodes a captured segment whose `'%'` occurrence has already been scanned.
pub(crate) fn decode_flagged(raw: &str, has_percent: bool) -> Cow<'_, str> {
    if !has_percent {
        return Cow::Borrowed(raw);
    }
    // `percent_decode` keeps '+' and malformed escapes as they are.
    match percent_decode(raw.as_bytes()).decode_utf8() {
        Ok(decoded) => decoded,
        Err(e) => {
            log::trace!("keep the raw value {:?}: {}", raw, e);
            Cow::Borrowed(raw)
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::decode, std::borrow::Cow};

    #[test]
    fn plain_value_is_borrowed() {
        match decode("readme.txt") {
            Cow::Borrowed(s) => assert_eq!(s, "readme.txt"),
            Cow::Owned(..) => panic!("unexpected allocation"),
        }
    }

    #[test]
    fn percent_encoded() {
        assert_eq!(decode("a%2Bb"), "a+b");
        assert_eq!(decode("hello%20world"), "hello world");
        assert_eq!(decode("%E3%81%82"), "\u{3042}");
    }

    #[test]
    fn plus_is_preserved() {
        assert_eq!(decode("a+b"), "a+b");
        assert_eq!(decode("a+b%20c"), "a+b c");
    }

    #[test]
    fn malformed_escape_is_kept() {
        assert_eq!(decode("100%"), "100%");
        assert_eq!(decode("%zz%41"), "%zzA");
    }

    #[test]
    fn invalid_utf8_falls_back_to_raw() {
        assert_eq!(decode("%FF%FE"), "%FF%FE");
    }
}
