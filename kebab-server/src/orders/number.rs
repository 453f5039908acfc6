//! Order number generation
//!
//! `ORD-<YYYYMMDD>-<NNN>`, NNN drawn uniformly from `0..1000`. Collisions on the
//! same day are possible; the store rejects duplicates and the service retries.

use chrono::{DateTime, Utc};
use rand::Rng;

const PREFIX: &str = "ORD";

pub fn format_order_number(now: DateTime<Utc>, suffix: u16) -> String {
    format!("{}-{}-{:03}", PREFIX, now.format("%Y%m%d"), suffix % 1000)
}

/// Fresh order number for `now` with a random suffix
pub fn generate_order_number(now: DateTime<Utc>) -> String {
    let suffix = rand::thread_rng().gen_range(0..1000u16);
    format_order_number(now, suffix)
}

/// Shape check only (`ORD-` + 8 digits + `-` + 3 digits)
pub fn is_order_number(value: &str) -> bool {
    let Some(rest) = value.strip_prefix("ORD-") else {
        return false;
    };
    match rest.split_once('-') {
        Some((date, suffix)) => {
            date.len() == 8
                && suffix.len() == 3
                && date.bytes().all(|b| b.is_ascii_digit())
                && suffix.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}
