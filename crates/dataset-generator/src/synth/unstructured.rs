//! Unstructured log line synthesizer.

use super::pick;
use super::semi::backdate;
use crate::rng::RandomSource;
use chrono::{DateTime, Utc};

/// Glyph between the timestamp and the message of a line.
pub const LINE_SEPARATOR: char = '\u{2014}';

/// Message tokens.
pub const TOKENS: [&str; 17] = [
    "error", "warn", "info", "retry", "timeout", "ok", "captcha", "token", "db", "cache", "red",
    "cola", "http", "503", "200", "lat", "lon",
];

/// Topic appended to every line.
pub const TOPICS: [&str; 6] = ["checkout", "auth", "envio", "carrito", "pago", "fraude"];

/// Maximum back-dating of log timestamps.
pub const MAX_LINE_AGE_SECS: i64 = 7 * 24 * 3600;

/// Inclusive token count range per line.
pub const MIN_TOKENS: i64 = 12;
pub const MAX_TOKENS: i64 = 20;

/// Synthesize one log line: `<ts> — <tokens...> <topic>`.
///
/// Draw order: token count, timestamp offset, tokens, topic.
pub fn synthesize_log_line<R: RandomSource>(rng: &mut R, reference_time: DateTime<Utc>) -> String {
    let words = rng.random_int(MIN_TOKENS, MAX_TOKENS);
    let offset = rng.random_int(0, MAX_LINE_AGE_SECS);

    let mut line = format!("{} {LINE_SEPARATOR}", backdate(reference_time, offset));
    for _ in 0..words {
        line.push(' ');
        line.push_str(pick(rng, &TOKENS));
    }
    line.push(' ');
    line.push_str(pick(rng, &TOPICS));
    line
}
