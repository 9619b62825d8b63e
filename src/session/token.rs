//! Local inspection of session tokens
//!
//! Tokens are compact `header.claims.signature` strings. Only the claims
//! segment is read here and the signature is never checked; the server is
//! the authority on validity. Anything that cannot be decoded is treated as
//! not expired.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Standard-alphabet decoder that accepts missing padding and stray trailing bits.
const CLAIMS_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decode the claims segment into a JSON value.
fn decode_claims(raw: &str) -> Option<Value> {
    let segment = raw.split('.').nth(1).filter(|s| !s.is_empty())?;

    // base64url -> standard alphabet
    let standard = segment.replace('-', "+").replace('_', "/");
    let bytes = CLAIMS_ENGINE.decode(standard.as_bytes()).ok()?;
    let json = String::from_utf8(bytes).ok()?;
    serde_json::from_str(&json).ok()
}

/// Read `exp` as seconds since epoch, following loose truthiness: `null`,
/// `false`, `0` and `""` mean no expiry, `true` counts as 1, and strings are
/// parsed as numbers (blank strings count as 0). Unparseable values come back
/// as `None`.
fn expiry_seconds(claims: &Value) -> Option<f64> {
    match claims.get("exp")? {
        Value::Number(n) => n.as_f64().filter(|exp| *exp != 0.0 && !exp.is_nan()),
        Value::Bool(true) => Some(1.0),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => match s.trim() {
            "" => Some(0.0),
            trimmed => trimmed.parse::<f64>().ok().filter(|exp| !exp.is_nan()),
        },
        _ => None,
    }
}

/// Whether the token's `exp` claim is at or before `now` (seconds since epoch).
pub fn is_expired_at(raw: &str, now: i64) -> bool {
    decode_claims(raw)
        .as_ref()
        .and_then(expiry_seconds)
        .is_some_and(|exp| exp <= now as f64)
}

/// Whether the token has expired as of the current wall-clock time.
pub fn is_expired(raw: &str) -> bool {
    is_expired_at(raw, Utc::now().timestamp())
}

/// Decoded expiry instant, when the token carries a usable `exp` claim.
pub fn expires_at(raw: &str) -> Option<DateTime<Utc>> {
    let exp = decode_claims(raw).as_ref().and_then(expiry_seconds)?;
    DateTime::from_timestamp(exp.floor() as i64, 0)
}
