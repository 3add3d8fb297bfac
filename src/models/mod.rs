pub mod attendance;
pub mod attendee;
pub mod community;
pub mod roster_summary;
