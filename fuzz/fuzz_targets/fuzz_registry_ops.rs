//! Fuzz target: enroll / withdraw with arbitrary activity names and emails.
//!
//! Verifies that no input panics the registry and that the participant
//! lists stay free of duplicates after any operation sequence.

#![no_main]

use std::collections::HashSet;

use libfuzzer_sys::fuzz_target;
use mergington_core::{ActivityRegistry, ErrorKind};

const NAMES: [&str; 3] = ["Chess Club", "Art Studio", "Tennis Club"];

fuzz_target!(|data: &[u8]| {
    let registry = ActivityRegistry::seeded();

    // Each chunk is one op: first byte picks op and activity, rest is the email.
    for chunk in data.split(|b| *b == 0xff) {
        let Some((&selector, email)) = chunk.split_first() else {
            continue;
        };
        let email = String::from_utf8_lossy(email);
        let activity = match NAMES.get(usize::from(selector % 4)) {
            Some(name) => (*name).to_owned(),
            None => String::from_utf8_lossy(chunk).into_owned(),
        };

        let result = if selector & 0x80 == 0 {
            registry.enroll(&activity, &email)
        } else {
            registry.withdraw(&activity, &email)
        };
        if let Err(e) = result {
            assert!(matches!(e.kind(), ErrorKind::NotFound | ErrorKind::Conflict));
        }
    }

    for (name, activity) in registry.list() {
        let unique: HashSet<&str> = activity.participants.iter().map(|p| p.as_str()).collect();
        assert_eq!(unique.len(), activity.participants.len(), "{name} has duplicate participants");
    }
});
