//! Request extraction helpers for inbound HTTP adapters.
//!
//! Actix answers extractor failures with plain-text bodies by default. The
//! configs here route them through the domain [`Error`] instead so every
//! failure shares the same JSON shape and trace id.
//!
//! Path ids are deliberately lenient: a segment that is not an integer cannot
//! name any row, so handlers treat it exactly like an id with no match.

use actix_web::web;

use crate::domain::{Error, UserId};

/// JSON body extractor configuration answering failures with `invalid_request`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| Error::invalid_request(err.to_string()).into())
}

/// Parse the `{id}` path segment into a [`UserId`].
///
/// Returns `None` when `raw` is not a signed 64-bit integer; no stored row
/// can carry such an id.
pub(crate) fn parse_user_id(raw: &str) -> Option<UserId> {
    raw.parse::<i64>().ok().map(UserId::new)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("1", 1)]
    #[case("999999", 999_999)]
    #[case("-3", -3)]
    fn parse_user_id_accepts_integers(#[case] raw: &str, #[case] expected: i64) {
        assert_eq!(parse_user_id(raw), Some(UserId::new(expected)));
    }

    #[rstest]
    #[case("abc")]
    #[case("1.5")]
    #[case("")]
    #[case("99999999999999999999")]
    fn parse_user_id_yields_nothing_for_non_integers(#[case] raw: &str) {
        assert_eq!(parse_user_id(raw), None);
    }
}
