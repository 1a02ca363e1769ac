// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::Choice;

/// Generate a random Choice
pub fn choice() -> impl Strategy<Value = Choice> {
    prop_oneof![
        Just(Choice::Rock),
        Just(Choice::Paper),
        Just(Choice::Scissors),
    ]
}

/// Generate a player id shaped like a platform snowflake
pub fn user_id() -> impl Strategy<Value = String> {
    "[1-9][0-9]{16,18}"
}
