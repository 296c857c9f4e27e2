//! Beam search over slot-disjoint item sets.
//!
//! The search grows loadouts one item at a time:
//!
//! 1. **Filter**: items priced at most `money / reserve_ratio` whose
//!    requirements the character meets
//! 2. **Pairs**: every weapon combined with one item from another slot, scored
//!    by the weapon's `damage × range` over the combined stats
//! 3. **Extension rounds**: each retained set gains one item from a free slot;
//!    the score is multiplied by sustain factors (best stamina and life
//!    regeneration) and by the resist bonuses of the fourth and fifth items
//! 4. **Selection**: every set scored in any round lands in one ledger; the
//!    best one whose total price fits the budget wins
//!
//! Weapons alone are scored too, so a catalogue with a single usable weapon
//! still yields a one-item loadout.

use std::collections::HashSet;

use arrayvec::ArrayVec;
use game_core::{AttributeVector, Character, Item, Slot, SlotSet};

use super::scoring;
use crate::config::ShopConfig;

/// Positions (0-based) whose static resists multiply a set's score.
const RESIST_POSITIONS: [usize; 2] = [3, 4];

/// Catalogue indices of one candidate set; the weapon is always first.
type Members = ArrayVec<usize, { Slot::COUNT }>;

#[derive(Clone, Debug)]
struct ScoredSet {
    members: Members,
    slots: SlotSet,
    score: f32,
}

impl ScoredSet {
    /// Weapon first, remaining members sorted.
    fn dedup_key(&self) -> Members {
        let mut key = self.members.clone();
        if key.len() > 1 {
            key[1..].sort_unstable();
        }
        key
    }
}

/// Items chosen by the search, weapon first.
#[derive(Clone, Debug, PartialEq)]
pub struct Loadout<'a> {
    pub items: Vec<&'a Item>,
    pub score: f32,
}

impl Loadout<'_> {
    pub fn ids(&self) -> Vec<String> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }

    pub fn total_price(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.price)).sum()
    }
}

/// Budget-constrained loadout search.
#[derive(Clone, Debug)]
pub struct EquipmentOptimizer<'c> {
    config: &'c ShopConfig,
}

impl<'c> EquipmentOptimizer<'c> {
    pub fn new(config: &'c ShopConfig) -> Self {
        Self { config }
    }

    /// Best affordable loadout for `character`, or `None` when no weapon in
    /// the catalogue scores positively within budget.
    pub fn optimize<'a>(&self, character: &Character, catalogue: &'a [Item]) -> Option<Loadout<'a>> {
        let base = character.attributes;
        let candidates = self.candidates(character, catalogue);
        tracing::debug!(
            "Shop search: {} of {} items within budget",
            candidates.len(),
            catalogue.len()
        );

        let mut ledger: Vec<ScoredSet> = Vec::new();

        for &index in &candidates {
            let item = &catalogue[index];
            if !scoring::is_weapon(item, &base) {
                continue;
            }
            let mut members = Members::new();
            members.push(index);
            if let Some(set) = self.score(catalogue, members, &base) {
                ledger.push(set);
            }
        }

        let pairs = self.pairs(catalogue, &candidates, &base);
        ledger.extend(pairs.iter().cloned());
        let mut beam = retain_best(pairs, self.config.pair_beam_width);

        let rounds = self.config.extension_rounds.min(Slot::COUNT - 2);
        for round in 0..rounds {
            if beam.is_empty() {
                break;
            }
            let grown = self.extend(catalogue, &candidates, &base, &beam, round == 0);
            tracing::debug!("Shop round {}: {} sets scored", round + 2, grown.len());
            ledger.extend(grown.iter().cloned());
            beam = retain_best(grown, self.config.beam_width);
        }

        rank(&mut ledger);
        let budget = u64::from(character.money);
        let chosen = ledger.into_iter().find(|set| {
            let price: u64 = set
                .members
                .iter()
                .map(|&index| u64::from(catalogue[index].price))
                .sum();
            price <= budget
        })?;

        Some(Loadout {
            items: chosen.members.iter().map(|&index| &catalogue[index]).collect(),
            score: chosen.score,
        })
    }

    fn candidates(&self, character: &Character, catalogue: &[Item]) -> Vec<usize> {
        let limit = character.money as f32 / self.config.reserve_ratio;
        catalogue
            .iter()
            .enumerate()
            .filter(|(_, item)| {
                item.price as f32 <= limit && character.attributes.meets(&item.requirements)
            })
            .map(|(index, _)| index)
            .collect()
    }

    fn pairs(&self, catalogue: &[Item], candidates: &[usize], base: &AttributeVector) -> Vec<ScoredSet> {
        let mut round = Vec::new();
        for &weapon in candidates {
            if !scoring::is_weapon(&catalogue[weapon], base) {
                continue;
            }
            for &partner in candidates {
                if catalogue[partner].slot == catalogue[weapon].slot {
                    continue;
                }
                let mut members = Members::new();
                members.push(weapon);
                members.push(partner);
                if let Some(set) = self.score(catalogue, members, base) {
                    round.push(set);
                }
            }
        }

        round
    }

    fn extend(
        &self,
        catalogue: &[Item],
        candidates: &[usize],
        base: &AttributeVector,
        beam: &[ScoredSet],
        require_sustain: bool,
    ) -> Vec<ScoredSet> {
        let mut seen = HashSet::new();
        let mut round = Vec::new();

        for set in beam {
            for &index in candidates {
                if set.slots.occupied(catalogue[index].slot) {
                    continue;
                }
                let mut members = set.members.clone();
                members.push(index);
                let Some(grown) = self.score(catalogue, members, base) else {
                    continue;
                };
                if require_sustain && !has_sustain(catalogue, &grown, base) {
                    continue;
                }
                if seen.insert(grown.dedup_key()) {
                    round.push(grown);
                }
            }
        }

        round
    }

    /// Scores a set, returning `None` unless the score is positive.
    fn score(&self, catalogue: &[Item], members: Members, base: &AttributeVector) -> Option<ScoredSet> {
        let items: ArrayVec<&Item, { Slot::COUNT }> =
            members.iter().map(|&index| &catalogue[index]).collect();
        let combined = *base + items.iter().map(|item| &item.attributes).sum::<AttributeVector>();
        let slots = items
            .iter()
            .fold(SlotSet::empty(), |slots, item| slots.with(item.slot));

        let mut score = scoring::weapon_value(items.first()?, &combined)?;

        if items.len() > 2 {
            let stamina = best_of(&items, |item| scoring::stamina_regen(item, &combined));
            let life = best_of(&items, |item| scoring::life_regen(item, &combined));
            score *= 1.0 + self.config.rest_weight * stamina;
            score *= 1.0 + self.config.rest_weight * life;

            for position in RESIST_POSITIONS {
                if let Some(item) = items.get(position) {
                    score *= scoring::resist_factor(item, self.config);
                }
            }
        }

        (score > 0.0).then_some(ScoredSet {
            members,
            slots,
            score,
        })
    }
}

fn best_of(items: &[&Item], regen: impl Fn(&Item) -> f32) -> f32 {
    items.iter().map(|item| regen(*item)).fold(0.0, f32::max)
}

fn has_sustain(catalogue: &[Item], set: &ScoredSet, base: &AttributeVector) -> bool {
    let items: ArrayVec<&Item, { Slot::COUNT }> =
        set.members.iter().map(|&index| &catalogue[index]).collect();
    let combined = *base + items.iter().map(|item| &item.attributes).sum::<AttributeVector>();
    best_of(&items, |item| scoring::stamina_regen(item, &combined)) > 0.0
        || best_of(&items, |item| scoring::life_regen(item, &combined)) > 0.0
}

/// Stable descending sort by score.
fn rank(sets: &mut [ScoredSet]) {
    sets.sort_by(|a, b| b.score.total_cmp(&a.score));
}

fn retain_best(mut sets: Vec<ScoredSet>, width: usize) -> Vec<ScoredSet> {
    rank(&mut sets);
    sets.truncate(width);
    sets
}
