//! Checkout display gating.
//! The checkout affordance is withheld for a short grace interval after
//! check-in, so an arrival tap cannot immediately become a departure tap.

use chrono::{DateTime, Utc};

/// Grace interval after check-in before checkout is offered, in seconds.
pub const CHECKOUT_GRACE_SECS: i64 = 5;

/// True once the grace interval has elapsed since `check_in`.
pub fn checkout_available(check_in: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(check_in).num_seconds() >= CHECKOUT_GRACE_SECS
}

/// Seconds still to wait before checkout is offered (0 when available).
pub fn remaining_grace(check_in: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let elapsed = now.signed_duration_since(check_in).num_seconds();
    (CHECKOUT_GRACE_SECS - elapsed).max(0)
}
