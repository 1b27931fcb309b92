//! Identifier generation for team members and work items.
//!
//! Ids look like `story-m1x9k2ab4fq`: the prefix, a dash, the current Unix
//! time in milliseconds in base 36, then five random base-36 characters.

use chrono::Utc;

const ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

const RANDOM_LENGTH: usize = 5;

pub const TEAM_MEMBER_PREFIX: &str = "tm";
pub const INITIATIVE_PREFIX: &str = "init";
pub const EPIC_PREFIX: &str = "epic";
pub const FEATURE_PREFIX: &str = "feat";
pub const STORY_PREFIX: &str = "story";

/// Generate a new id with the given prefix.
pub fn generate_id(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let random = nanoid::format(nanoid::rngs::default, &ALPHABET, RANDOM_LENGTH);
    format!("{}-{}{}", prefix, to_base36(millis), random)
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    digits.iter().rev().collect()
}
