use proptest::prelude::*;

use crate::domain::test_gens;
/// Property-based tests for the outcome table
use crate::domain::{resolve, ChallengeSession, Choice, Outcome};

proptest! {
    /// Property: swapping the arguments inverts the outcome.
    #[test]
    fn prop_resolve_is_antisymmetric(a in test_gens::choice(), b in test_gens::choice()) {
        prop_assert_eq!(resolve(a, b), resolve(b, a).inverse());
    }

    /// Property: identical choices always draw; distinct choices never do.
    #[test]
    fn prop_draw_iff_same(a in test_gens::choice(), b in test_gens::choice()) {
        prop_assert_eq!(resolve(a, b) == Outcome::Draw, a == b);
    }

    /// Property: exactly one verb describes any decisive pair, owned by the winner.
    #[test]
    fn prop_winner_has_the_verb(a in test_gens::choice(), b in test_gens::choice()) {
        match resolve(a, b) {
            Outcome::FirstWins => {
                prop_assert!(a.verb_against(b).is_some());
                prop_assert!(b.verb_against(a).is_none());
            }
            Outcome::SecondWins => {
                prop_assert!(b.verb_against(a).is_some());
                prop_assert!(a.verb_against(b).is_none());
            }
            Outcome::Draw => {
                prop_assert!(a.verb_against(b).is_none());
                prop_assert!(b.verb_against(a).is_none());
            }
        }
    }

    /// Property: the announcement mentions both players whatever the outcome.
    #[test]
    fn prop_result_text_mentions_both_players(
        challenger in test_gens::user_id(),
        opponent in test_gens::user_id(),
        a in test_gens::choice(),
        b in test_gens::choice(),
    ) {
        let text = ChallengeSession::new(challenger.clone(), a)
            .resolve(opponent.clone(), b)
            .describe();
        let challenger_mention = format!("<@{challenger}>");
        let opponent_mention = format!("<@{opponent}>");
        prop_assert!(text.contains(&challenger_mention));
        prop_assert!(text.contains(&opponent_mention));
    }
}

#[test]
fn every_choice_beats_exactly_one_other() {
    for a in Choice::ALL {
        let wins = Choice::ALL.iter().filter(|b| a.beats(**b)).count();
        assert_eq!(wins, 1, "{a} should beat exactly one choice");
    }
}
