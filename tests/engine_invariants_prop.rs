#![forbid(unsafe_code)]

//! Property tests for the move kernel.
//!
//! Invariants covered:
//! - Rejected moves leave the whole snapshot unchanged.
//! - Stacks never exceed capacity and the discard count stays in range.
//! - Score never decreases and the lookahead length never changes.
//! - `legal_moves` agrees with `validate_move`.
//! - The iterative cascade scores like the plain recursive definition.

use pilemerge::{GameEngine, MergePile, Rules, Tile};
use proptest::prelude::*;

/// Recursive reference: merge the top pair, score `sum * multiplier`, recurse.
fn reference_merge(tiles: &mut Vec<u32>, multiplier: u64) -> u64 {
    let n = tiles.len();
    if n < 2 || tiles[n - 1] != tiles[n - 2] {
        return 0;
    }
    let sum = tiles.pop().unwrap() + tiles.pop().unwrap();
    tiles.push(sum);
    u64::from(sum) * multiplier + reference_merge(tiles, multiplier + 1)
}

fn rules_strategy() -> impl Strategy<Value = Rules> {
    (1usize..5, 2usize..9, 0u32..4, 1usize..4, 4u32..12)
        .prop_map(|(stacks, cap, discards, look, exp)| Rules::new(stacks, cap, discards, look, 1 << exp))
}

proptest! {
    #[test]
    fn random_play_respects_core_invariants(
        rules in rules_strategy(),
        seed in any::<u64>(),
        picks in prop::collection::vec(0usize..8, 1..200),
    ) {
        let mut e = GameEngine::with_seed(rules, seed).unwrap();
        let mut last_score = 0u64;

        for pick in picks {
            let legal = e.legal_moves();
            for i in 0..rules.pile_count() + 2 {
                prop_assert_eq!(legal.contains(&i), e.validate_move(i).is_ok());
            }

            let before = e.snapshot();
            match e.apply_move(pick) {
                Ok(out) => {
                    prop_assert!(legal.contains(&pick));
                    prop_assert_eq!(e.score(), before.score + out.score_delta);
                }
                Err(_) => {
                    prop_assert!(!legal.contains(&pick));
                    prop_assert_eq!(&e.snapshot(), &before);
                }
            }

            for s in e.stacks() {
                prop_assert!(s.len() <= rules.stack_capacity);
            }
            prop_assert!(e.discard_count() <= rules.max_discards);
            prop_assert!(e.score() >= last_score);
            prop_assert_eq!(e.upcoming(usize::MAX).len(), rules.lookahead);
            last_score = e.score();
        }
    }

    #[test]
    fn cascade_matches_recursive_definition(
        exps in prop::collection::vec(1u32..7, 0..7),
        next in 1u32..7,
    ) {
        // Capacity 8 with tiles <= 64 can never reach 2048, so no clears here.
        let seed: Vec<Tile> = exps.iter().map(|&k| Tile::from_exponent(k)).collect();
        let mut pile = MergePile::with_tiles(8, Tile::new(2048), &seed);
        let out = pile.add_tile(Tile::from_exponent(next));

        let mut model: Vec<u32> = seed.iter().map(|t| t.magnitude()).collect();
        model.push(1 << next);
        let expected = reference_merge(&mut model, 1);

        prop_assert_eq!(out.score, expected);
        let got: Vec<u32> = pile.tiles().iter().map(|t| t.magnitude()).collect();
        prop_assert_eq!(got, model);
        prop_assert!(!out.cleared);
    }

    #[test]
    fn merges_preserve_total_worth(
        exps in prop::collection::vec(1u32..7, 0..7),
        next in 1u32..7,
    ) {
        let seed: Vec<Tile> = exps.iter().map(|&k| Tile::from_exponent(k)).collect();
        let mut pile = MergePile::with_tiles(8, Tile::new(2048), &seed);
        let before = pile.worth();
        let len_before = pile.len();
        let out = pile.add_tile(Tile::from_exponent(next));
        prop_assert_eq!(pile.worth(), before + u64::from(1u32 << next));
        prop_assert_eq!(pile.len() + out.merges as usize, len_before + 1);
    }
}
