//! Fuzz target: JSON serialization of the activity listing.
//!
//! Enrolls an arbitrary email and checks the listing always serializes
//! and deserializes back to the same roster.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mergington_core::{ActivityRegistry, Roster};

fuzz_target!(|data: &[u8]| {
    let registry = ActivityRegistry::seeded();
    let email = String::from_utf8_lossy(data);
    let _ = registry.enroll("Science Club", &email);

    let roster = registry.list();
    let json = serde_json::to_string(&roster).expect("roster serialization must not fail");
    let back: Roster = serde_json::from_str(&json).expect("roster deserialization must not fail");
    assert_eq!(back, roster);
});
