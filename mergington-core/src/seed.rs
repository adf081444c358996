//! The fixed activity table loaded at process start.
//!
//! The list is closed: activities are never added, renamed, or removed at runtime.

use crate::activity::{Activity, Roster};

/// Returns the seeded activities in their canonical order.
#[must_use]
pub fn seed_roster() -> Roster {
    [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Tennis Club",
            Activity::new(
                "Practice serves, rallies, and match play on the school courts",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                10,
            )
            .with_participants(["liam@mergington.edu", "ava@mergington.edu"]),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Train with the school team and play in the regional league",
                "Mondays and Wednesdays, 4:00 PM - 6:00 PM",
                15,
            )
            .with_participants(["noah@mergington.edu"]),
        ),
        (
            "Art Studio",
            Activity::new(
                "Explore drawing, painting, and mixed media in the open studio",
                "Wednesdays, 3:30 PM - 5:00 PM",
                18,
            )
            .with_participants(["isabella@mergington.edu", "mia@mergington.edu"]),
        ),
        (
            "Drama Club",
            Activity::new(
                "Rehearse and stage plays for the spring and winter showcases",
                "Thursdays, 4:00 PM - 6:00 PM",
                25,
            )
            .with_participants(["amelia@mergington.edu", "harper@mergington.edu"]),
        ),
        (
            "Math Olympiad",
            Activity::new(
                "Solve competition problems and prepare for math olympiads",
                "Tuesdays, 3:30 PM - 4:30 PM",
                16,
            )
            .with_participants(["james@mergington.edu"]),
        ),
        (
            "Science Club",
            Activity::new(
                "Run hands-on experiments and build projects for the science fair",
                "Fridays, 2:00 PM - 3:30 PM",
                20,
            )
            .with_participants(["benjamin@mergington.edu", "evelyn@mergington.edu"]),
        ),
    ]
    .into_iter()
    .map(|(name, activity)| (name.to_owned(), activity))
    .collect()
}
