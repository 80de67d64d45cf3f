//! Identifier canonicalization. Upstream tables mix `123`, `"123"` and `123.0` for the
//! same account; every id goes through `normalize_id` before it is compared or stored.

use crate::error::RecordError;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// An identifier exactly as it arrived from the staged record.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawId {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

impl From<u64> for RawId {
    fn from(v: u64) -> Self { RawId::Unsigned(v) }
}
impl From<i64> for RawId {
    fn from(v: i64) -> Self { RawId::Signed(v) }
}
impl From<f64> for RawId {
    fn from(v: f64) -> Self { RawId::Float(v) }
}
impl From<&str> for RawId {
    fn from(v: &str) -> Self { RawId::Text(v.to_string()) }
}
impl From<String> for RawId {
    fn from(v: String) -> Self { RawId::Text(v) }
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawId::Unsigned(v) => write!(f, "{v}"),
            RawId::Signed(v) => write!(f, "{v}"),
            RawId::Float(v) => write!(f, "{v}"),
            RawId::Text(s) => f.write_str(s),
        }
    }
}

/// Canonical form of an account or post identifier. Numeric-looking ids collapse to
/// `Num`; everything else is an opaque token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanonicalId {
    Num(u64),
    Text(String),
}

pub type NodeId = CanonicalId;
pub type TweetId = CanonicalId;

impl fmt::Display for CanonicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalId::Num(n) => write!(f, "{n}"),
            CanonicalId::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for CanonicalId {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CanonicalId {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = RawId::deserialize(d)?;
        normalize_id(&raw, "id")
            .map_err(serde::de::Error::custom)?
            .ok_or_else(|| serde::de::Error::custom("missing identifier"))
    }
}

impl From<u64> for CanonicalId {
    fn from(v: u64) -> Self { CanonicalId::Num(v) }
}

/// Tokens upstream tables use for "no value".
const MISSING: [&str; 4] = ["none", "null", "nan", "<na>"];

#[inline]
fn is_missing_token(s: &str) -> bool {
    s.is_empty() || MISSING.iter().any(|m| s.eq_ignore_ascii_case(m))
}

/// Largest f64 that still converts to u64 without saturating.
const U64_LIMIT: f64 = 18_446_744_073_709_551_615.0;

fn integral_float(v: f64) -> Option<u64> {
    if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v < U64_LIMIT {
        Some(v as u64)
    } else {
        None
    }
}

fn looks_numeric(s: &str) -> bool {
    s.bytes().any(|b| b.is_ascii_digit())
        && s.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
}

/// Canonicalize one identifier.
///
/// - `Ok(None)` for missing sentinels (`""`, `None`, `null`, `NaN`, float NaN).
/// - `Num` for non-negative integers, integral floats and strings spelling either.
/// - `Text` for any other string (screen-name-like handles, hex ids, ...).
/// - `Err` for numbers that cannot be an id (negatives, infinities, fractions), whether
///   they arrive as numbers or as strings.
pub fn normalize_id(raw: &RawId, field: &'static str) -> Result<Option<CanonicalId>, RecordError> {
    let invalid = || RecordError::InvalidId { field, raw: raw.to_string() };
    match raw {
        RawId::Unsigned(v) => Ok(Some(CanonicalId::Num(*v))),
        RawId::Signed(v) => u64::try_from(*v).map(|n| Some(CanonicalId::Num(n))).map_err(|_| invalid()),
        RawId::Float(v) if v.is_nan() => Ok(None),
        RawId::Float(v) => integral_float(*v).map(|n| Some(CanonicalId::Num(n))).ok_or_else(invalid),
        RawId::Text(s) => {
            let s = s.trim();
            if is_missing_token(s) {
                return Ok(None);
            }
            if let Ok(n) = s.parse::<u64>() {
                return Ok(Some(CanonicalId::Num(n)));
            }
            // "123.0" / "1.23e2" are serialized floats of a numeric id; "-5" and "1.5"
            // spell numbers that cannot be one.
            if looks_numeric(s) {
                if let Ok(v) = s.parse::<f64>() {
                    return integral_float(v).map(|n| Some(CanonicalId::Num(n))).ok_or_else(invalid);
                }
            }
            Ok(Some(CanonicalId::Text(s.to_string())))
        }
    }
}

/// Same as `normalize_id` for an optional field.
pub fn normalize_opt(raw: Option<&RawId>, field: &'static str) -> Result<Option<CanonicalId>, RecordError> {
    match raw {
        Some(r) => normalize_id(r, field),
        None => Ok(None),
    }
}

/// Screen names share the missing sentinels with ids; case is kept.
pub fn normalize_name(name: Option<&str>) -> Option<String> {
    let s = name?.trim();
    if is_missing_token(s) { None } else { Some(s.to_string()) }
}
