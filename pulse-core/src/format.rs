//! Text formatting for values shown on screen.

use std::fmt;

use chrono::{DateTime, Local, TimeZone};

pub fn location(name: &str, country: &str) -> String {
    format!("{name}, {country}")
}

pub fn temperature(celsius: f64) -> String {
    format!("{celsius:.1}°C")
}

pub fn humidity(pct: u8) -> String {
    format!("{pct}%")
}

pub fn wind_speed(mps: f64) -> String {
    format!("{mps:.1} m/s")
}

/// Capitalize the first letter of every whitespace-separated word and lowercase the rest.
pub fn capitalize_words(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Abbreviated weekday (`Mon`, `Tue`, ...) for a unix timestamp in the local timezone.
pub fn weekday(timestamp: i64) -> String {
    weekday_in(timestamp, &Local)
}

pub fn weekday_in<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    match DateTime::from_timestamp(timestamp, 0) {
        Some(utc) => utc.with_timezone(tz).format("%a").to_string(),
        None => "--".to_string(),
    }
}
