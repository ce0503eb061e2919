//! Semi-structured event row synthesizers.

use super::{pick, round_to, SessionTokens};
use crate::rng::RandomSource;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use dataset_core::{FieldValue, Row};

/// Fields present on every event row, in order.
pub const BASE_FIELDS: [&str; 5] = ["ts", "user", "ip", "event", "result"];

/// Fields an event row may carry, before shuffling.
pub const OPTIONAL_FIELDS: [&str; 5] = ["ua", "lat", "lon", "session", "referrer"];

/// Event names.
pub const EVENTS: [&str; 4] = ["login", "checkout", "view", "search"];

/// Event outcomes.
pub const RESULTS: [&str; 2] = ["ok", "fail"];

/// Platforms for the `ua` field.
pub const PLATFORMS: [&str; 4] = ["ios", "android", "web", "desktop"];

/// Channels for the `referrer` field.
pub const REFERRERS: [&str; 4] = ["direct", "email", "ads", "social"];

/// Maximum back-dating of event timestamps.
pub const MAX_EVENT_AGE_SECS: i64 = 30 * 24 * 3600;

/// Maximum number of optional fields per row.
pub const MAX_OPTIONAL_FIELDS: i64 = 3;

/// Synthesize one event row.
///
/// Draw order: timestamp offset, user, two octets, event, result, optional
/// field count, shuffle, then each chosen optional field.
pub fn synthesize_event_row<R: RandomSource>(
    rng: &mut R,
    sessions: &mut SessionTokens,
    reference_time: DateTime<Utc>,
) -> Row {
    let mut row = Row::with_capacity(BASE_FIELDS.len() + MAX_OPTIONAL_FIELDS as usize);

    let offset = rng.random_int(0, MAX_EVENT_AGE_SECS);
    row.insert("ts", FieldValue::Date(backdate(reference_time, offset)));
    row.insert("user", FieldValue::Int(rng.random_int(1, 5000)));
    let third = rng.random_int(0, 255);
    let fourth = rng.random_int(0, 255);
    row.insert("ip", FieldValue::Text(format!("192.168.{third}.{fourth}")));
    row.insert("event", FieldValue::text(pick(rng, &EVENTS)));
    row.insert("result", FieldValue::text(pick(rng, &RESULTS)));

    let count = rng.random_int(0, MAX_OPTIONAL_FIELDS) as usize;
    let mut optional = OPTIONAL_FIELDS;
    rng.shuffle(&mut optional);
    for name in optional.iter().take(count) {
        let value = synthesize_optional_field(rng, sessions, name);
        row.insert(*name, value);
    }

    row
}

/// Synthesize a value for an optional field. Unknown names yield `Null`.
pub fn synthesize_optional_field<R: RandomSource>(
    rng: &mut R,
    sessions: &mut SessionTokens,
    name: &str,
) -> FieldValue {
    match name {
        "ua" => FieldValue::text(pick(rng, &PLATFORMS)),
        "lat" => FieldValue::Float(round_to(rng.next_f64() * 180.0 - 90.0, 6)),
        "lon" => FieldValue::Float(round_to(rng.next_f64() * 360.0 - 180.0, 6)),
        "session" => FieldValue::Text(sessions.next_token()),
        "referrer" => FieldValue::text(pick(rng, &REFERRERS)),
        _ => FieldValue::Null,
    }
}

/// ISO-8601 timestamp `offset_secs` before `reference_time`, millisecond form.
pub(crate) fn backdate(reference_time: DateTime<Utc>, offset_secs: i64) -> String {
    (reference_time - Duration::seconds(offset_secs)).to_rfc3339_opts(SecondsFormat::Millis, true)
}
