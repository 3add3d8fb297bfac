/// ANSI color helper utilities for terminal output.
use crate::models::attendance::AttendanceState;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Returns GREY when the field is empty (None or placeholder), RESET otherwise.
pub fn color_for_optional_field<T: AsRef<str>>(value: Option<T>) -> &'static str {
    match value {
        Some(v) if !v.as_ref().trim().is_empty() && v.as_ref() != "--" => RESET,
        _ => GREY,
    }
}

/// State color: grey before arrival, green while in, yellow after departure.
pub fn color_for_state(state: AttendanceState) -> &'static str {
    match state {
        AttendanceState::NotArrived => GREY,
        AttendanceState::Present => GREEN,
        AttendanceState::Departed => YELLOW,
    }
}
