//! `Cookie` / `Set-Cookie` helpers for the session cookie.

use crate::SESSION_COOKIE;

/// Extract the session token from a list of `Set-Cookie` header values.
///
/// Returns `None` if no header sets the session cookie, or if the cookie is
/// being cleared (empty value or `Max-Age=0`).
#[must_use]
pub fn session_from_set_cookie<'a, I>(headers: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    headers.into_iter().find_map(parse_session_cookie)
}

fn parse_session_cookie(header: &str) -> Option<String> {
    let mut parts = header.split(';').map(str::trim);
    let (name, value) = parts.next()?.split_once('=')?;
    if name.trim() != SESSION_COOKIE {
        return None;
    }

    let cleared = parts.any(|attr| {
        attr.split_once('=')
            .is_some_and(|(k, v)| k.trim().eq_ignore_ascii_case("max-age") && v.trim() == "0")
    });
    let value = value.trim().trim_matches('"');
    if cleared || value.is_empty() {
        return None;
    }
    Some(value.to_string())
}

/// Build the `Cookie` request header value for a session token.
#[must_use]
pub fn cookie_header(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_token_from_login_cookie() {
        let headers = [
            "other=1; Path=/",
            "access_token=eyJhbGciOi.abc.def; HttpOnly; Max-Age=86400; Path=/; SameSite=lax",
        ];
        assert_eq!(
            session_from_set_cookie(headers).as_deref(),
            Some("eyJhbGciOi.abc.def")
        );
    }

    #[test]
    fn ignores_deletion_cookie() {
        let headers =
            [r#"access_token=""; expires=Thu, 01 Jan 1970 00:00:00 GMT; Max-Age=0; Path=/"#];
        assert!(session_from_set_cookie(headers).is_none());
    }

    #[test]
    fn ignores_unrelated_cookies() {
        assert!(session_from_set_cookie(["session=abc; Path=/"]).is_none());
        assert!(session_from_set_cookie(["garbage"]).is_none());
    }

    #[test]
    fn builds_cookie_header() {
        assert_eq!(cookie_header("tok"), "access_token=tok");
    }
}
