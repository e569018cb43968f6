/// Ordered header list, as sent on the wire.
pub type Headers = Vec<(String, String)>;

pub const AUTHORIZATION: &str = "Authorization";

/// Add `Authorization: Bearer <token>` to `base` (or to a fresh list).
///
/// An existing authorization entry is replaced so a replayed request never
/// carries two credentials.
pub fn authorized_headers(token: &str, base: Option<Headers>) -> Headers {
    let mut headers = base.unwrap_or_default();
    headers.retain(|(name, _)| !name.eq_ignore_ascii_case(AUTHORIZATION));
    headers.push((AUTHORIZATION.to_string(), format!("Bearer {token}")));
    headers
}
