use crate::models::Activity;

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: u32,
    participants: &'static [&'static str],
}

const SEED_ACTIVITIES: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball Team",
        description: "Competitive basketball training and inter-school games",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 15,
        participants: &["liam@mergington.edu"],
    },
    SeedActivity {
        name: "Tennis Club",
        description: "Tennis lessons and friendly matches for all skill levels",
        schedule: "Wednesdays, 3:30 PM - 5:00 PM",
        max_participants: 10,
        participants: &["ava@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Act, direct, and produce school plays and performances",
        schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 25,
        participants: &["mia@mergington.edu", "noah@mergington.edu"],
    },
    SeedActivity {
        name: "Art Class",
        description: "Explore painting, drawing, and sculpture techniques",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 18,
        participants: &["isabella@mergington.edu"],
    },
    SeedActivity {
        name: "Debate Team",
        description: "Develop public speaking and argumentation skills through competitive debate",
        schedule: "Fridays, 4:00 PM - 5:30 PM",
        max_participants: 16,
        participants: &["ethan@mergington.edu", "amelia@mergington.edu"],
    },
    SeedActivity {
        name: "Math Club",
        description: "Solve challenging problems and prepare for math competitions",
        schedule: "Tuesdays, 3:30 PM - 4:30 PM",
        max_participants: 14,
        participants: &["lucas@mergington.edu"],
    },
];

/// The catalog every process starts from. Signups made at runtime are not kept.
pub fn seed_activities() -> Vec<Activity> {
    SEED_ACTIVITIES
        .iter()
        .map(|s| Activity {
            name: s.name.to_string(),
            description: s.description.to_string(),
            schedule: s.schedule.to_string(),
            max_participants: s.max_participants,
            participants: s.participants.iter().map(|p| p.to_string()).collect(),
        })
        .collect()
}
