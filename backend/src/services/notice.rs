//! Signed flash notices.
//!
//! Confirmation messages shown after a mutation ("Book added!") survive the
//! redirect in a cookie. The value is the base64 of the message followed by
//! an md5 digest over the secret key and the message, so a client cannot
//! alter the text. Anything with a bad signature is discarded silently.

use actix_web::cookie::Cookie;
use actix_web::HttpRequest;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

pub const COOKIE_NAME: &str = "notice";

fn signature(secret: &str, message: &str) -> String {
    let mut hasher = md5::Context::new();
    hasher.consume(secret.as_bytes());
    hasher.consume(b".");
    hasher.consume(message.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Builds the cookie carrying `message`, signed with `secret`.
pub fn set(secret: &str, message: &str) -> Cookie<'static> {
    let value = format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(message),
        signature(secret, message)
    );
    Cookie::build(COOKIE_NAME, value).path("/").finish()
}

/// Extracts and verifies the pending notice from the request, if any.
pub fn take(req: &HttpRequest, secret: &str) -> Option<String> {
    let cookie = req.cookie(COOKIE_NAME)?;
    let (encoded, sig) = cookie.value().split_once('.')?;
    let bytes = URL_SAFE_NO_PAD.decode(encoded).ok()?;
    let message = String::from_utf8(bytes).ok()?;
    if sig == signature(secret, &message) {
        Some(message)
    } else {
        None
    }
}

/// A removal cookie that clears the notice on the client once shown.
pub fn clear() -> Cookie<'static> {
    let mut cookie = Cookie::build(COOKIE_NAME, "").path("/").finish();
    cookie.make_removal();
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn round_trips_through_a_request() {
        let cookie = set("secret", "Book added!");
        let req = TestRequest::default().cookie(cookie).to_http_request();
        assert_eq!(take(&req, "secret"), Some("Book added!".to_string()));
    }

    #[test]
    fn tampered_value_is_discarded() {
        let cookie = set("secret", "Book added!");
        let forged = Cookie::new(COOKIE_NAME, cookie.value().replace('.', "x."));
        let req = TestRequest::default().cookie(forged).to_http_request();
        assert_eq!(take(&req, "secret"), None);
    }

    #[test]
    fn wrong_secret_is_discarded() {
        let cookie = set("secret", "Book added!");
        let req = TestRequest::default().cookie(cookie).to_http_request();
        assert_eq!(take(&req, "other-secret"), None);
    }

    #[test]
    fn garbage_cookie_is_discarded() {
        let req = TestRequest::default()
            .cookie(Cookie::new(COOKIE_NAME, "not-a-signed-value"))
            .to_http_request();
        assert_eq!(take(&req, "secret"), None);
    }
}
