use chrono::{Duration, Utc};
use crate::core::Thread;
use crate::models::{Message, Profile, ProfileType};

fn profile(
    id: &str,
    name: &str,
    age: u8,
    gender: &str,
    major: &str,
    class_year: &str,
    profile_type: &[ProfileType],
    interests: &[&str],
    bio: &str,
    image: &str,
    similarity: u8,
) -> Profile {
    Profile {
        id: id.to_string(),
        name: name.to_string(),
        age,
        gender: gender.to_string(),
        major: major.to_string(),
        class_year: class_year.to_string(),
        profile_type: profile_type.to_vec(),
        interests: interests.iter().map(|s| s.to_string()).collect(),
        bio: Some(bio.to_string()),
        image_url: format!("https://images.unsplash.com/{}?w=500&h=500&fit=crop", image),
        similarity: Some(similarity),
    }
}

/// Profiles served to the swipe deck, in display order
pub fn sample_profiles() -> Vec<Profile> {
    use ProfileType::*;

    vec![
        profile(
            "1", "Alex", 21, "male", "Computer Science", "Junior",
            &[Friendship, Study],
            &["Coding", "Hiking", "Chess", "Video Games"],
            "Looking for study partners for algorithms and data structures. Also enjoy hiking on weekends!",
            "photo-1506794778202-cad84cf45f1d", 87,
        ),
        profile(
            "2", "Jamie", 20, "female", "Psychology", "Sophomore",
            &[Friendship, Roommate],
            &["Reading", "Yoga", "Coffee", "Art"],
            "Early riser, clean and organized. Looking for a roommate who respects quiet study time.",
            "photo-1544005313-94ddf0286df2", 75,
        ),
        profile(
            "3", "Taylor", 22, "non-binary", "Marketing", "Senior",
            &[Relationship, Friendship],
            &["Music", "Photography", "Travel", "Social Media"],
            "Creative person looking to connect with other artistic minds on campus.",
            "photo-1517841905240-472988babdf9", 92,
        ),
        profile(
            "4", "Jordan", 19, "male", "Sports Science", "Freshman",
            &[Friendship, Study],
            &["Basketball", "Fitness", "Nutrition", "Gaming"],
            "Student athlete looking for study buddies and gym partners.",
            "photo-1507003211169-0a1dd7228f2d", 68,
        ),
        profile(
            "5", "Morgan", 21, "female", "Biology", "Junior",
            &[Roommate, Friendship],
            &["Animals", "Netflix", "Running", "Cooking"],
            "Pre-med student who loves cooking and sharing meals. Looking for a roommate for next semester.",
            "photo-1494790108377-be9c29b29330", 81,
        ),
    ]
}

fn at(message: Message, minutes_ago: i64) -> Message {
    Message {
        time: Utc::now() - Duration::minutes(minutes_ago),
        ..message
    }
}

fn read(message: Message) -> Message {
    Message {
        read: Some(true),
        ..message
    }
}

/// Inbox threads with prior history
pub fn sample_threads() -> Vec<Thread> {
    let profiles = sample_profiles();
    let image = |id: &str| {
        profiles
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.image_url.clone())
            .unwrap_or_default()
    };

    let mut alex = Thread::new("1", "Alex", image("1"));
    alex.online = true;
    alex.unread = true;
    alex.messages = vec![
        at(Message::incoming("Hey, do you want to study together tomorrow?"), 12),
        at(read(Message::outgoing("Sure, what time works for you?")), 10),
    ];

    let mut taylor = Thread::new("3", "Taylor", image("3"));
    taylor.messages = vec![at(
        Message::incoming("I liked your photography work. Very impressive!"),
        120,
    )];

    let mut morgan = Thread::new("5", "Morgan", image("5"));
    morgan.online = true;
    morgan.messages = vec![
        at(read(Message::outgoing("Hi there! Would you like to grab coffee sometime?")), 24 * 60 + 45),
        at(Message::incoming("That sounds great!"), 24 * 60),
        at(Message::incoming("What time would you prefer to meet for coffee?"), 24 * 60 - 1),
    ];

    vec![alex, taylor, morgan]
}
