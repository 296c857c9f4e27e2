//! Attribute vectors and their algebra.
//!
//! Every numeric quantity the game exposes about a character or item is an
//! [`AttributeVector`]: thirteen named components plus a scalar `constant`.
//! The same shape plays four roles:
//!
//! - **Stats**: a character's current or maximum attributes
//! - **Requirement**: the threshold an item or skill demands
//! - **Cost**: the resources a skill consumes
//! - **Formula**: a damage, range or effect amount that scales with the
//!   caster's stats (`formula.constant` is the flat part)
//!
//! The type does not distinguish these roles; callers keep track of which
//! role a given value plays. All operations are pure and never clamp.

use core::iter::Sum;
use core::ops::Add;

/// Named component of an [`AttributeVector`].
///
/// Declaration order is the canonical component order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Attribute {
    Strength,
    Dexterity,
    Intelligence,
    Willpower,
    Constitution,
    SlashResist,
    PierceResist,
    FireResist,
    PoisonResist,
    ElectricResist,
    Life,
    Stamina,
    Mana,
}

impl Attribute {
    /// Number of named components (the `constant` term is not counted).
    pub const COUNT: usize = 13;
}

/// Fixed-dimension attribute vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct AttributeVector {
    pub strength: f32,
    pub dexterity: f32,
    pub intelligence: f32,
    pub willpower: f32,
    pub constitution: f32,
    pub slash_resist: f32,
    pub pierce_resist: f32,
    pub fire_resist: f32,
    pub poison_resist: f32,
    pub electric_resist: f32,
    pub life: f32,
    pub stamina: f32,
    pub mana: f32,
    pub constant: f32,
}

impl AttributeVector {
    /// Identity element of [`AttributeVector::sum`].
    pub const ZERO: Self = Self::splat(0.0, 0.0);

    /// All named components set to one, constant zero.
    ///
    /// Evaluating a formula against these measures its intrinsic power
    /// independent of any character.
    pub const UNIT: Self = Self::splat(1.0, 0.0);

    const fn splat(value: f32, constant: f32) -> Self {
        Self {
            strength: value,
            dexterity: value,
            intelligence: value,
            willpower: value,
            constitution: value,
            slash_resist: value,
            pierce_resist: value,
            fire_resist: value,
            poison_resist: value,
            electric_resist: value,
            life: value,
            stamina: value,
            mana: value,
            constant,
        }
    }

    /// A vector holding only the flat `constant` term.
    pub const fn constant(constant: f32) -> Self {
        Self::splat(0.0, constant)
    }

    /// Reads one named component.
    pub fn get(&self, attribute: Attribute) -> f32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Intelligence => self.intelligence,
            Attribute::Willpower => self.willpower,
            Attribute::Constitution => self.constitution,
            Attribute::SlashResist => self.slash_resist,
            Attribute::PierceResist => self.pierce_resist,
            Attribute::FireResist => self.fire_resist,
            Attribute::PoisonResist => self.poison_resist,
            Attribute::ElectricResist => self.electric_resist,
            Attribute::Life => self.life,
            Attribute::Stamina => self.stamina,
            Attribute::Mana => self.mana,
        }
    }

    fn slot_mut(&mut self, attribute: Attribute) -> &mut f32 {
        match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Dexterity => &mut self.dexterity,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Willpower => &mut self.willpower,
            Attribute::Constitution => &mut self.constitution,
            Attribute::SlashResist => &mut self.slash_resist,
            Attribute::PierceResist => &mut self.pierce_resist,
            Attribute::FireResist => &mut self.fire_resist,
            Attribute::PoisonResist => &mut self.poison_resist,
            Attribute::ElectricResist => &mut self.electric_resist,
            Attribute::Life => &mut self.life,
            Attribute::Stamina => &mut self.stamina,
            Attribute::Mana => &mut self.mana,
        }
    }

    /// Returns a copy with one component replaced (builder pattern).
    #[must_use]
    pub fn with(mut self, attribute: Attribute, value: f32) -> Self {
        *self.slot_mut(attribute) = value;
        self
    }

    /// Returns a copy with the constant term replaced (builder pattern).
    #[must_use]
    pub fn with_constant(mut self, constant: f32) -> Self {
        self.constant = constant;
        self
    }

    /// Evaluates `formula` against these stats.
    ///
    /// `Σ self[i] * formula[i] + formula.constant`. The constant of `self`
    /// is ignored, so stats are always the left operand.
    pub fn dot(&self, formula: &AttributeVector) -> f32 {
        self.iter()
            .map(|(attribute, value)| value * formula.get(attribute))
            .sum::<f32>()
            + formula.constant
    }

    /// Component-wise threshold check: every named component of `self` is at
    /// least the corresponding component of `requirement`.
    pub fn meets(&self, requirement: &AttributeVector) -> bool {
        self.iter()
            .all(|(attribute, value)| value >= requirement.get(attribute))
    }

    /// Component-wise sum of any number of vectors, constant included.
    ///
    /// Left fold starting from [`AttributeVector::ZERO`].
    pub fn sum<'a, I>(vectors: I) -> AttributeVector
    where
        I: IntoIterator<Item = &'a AttributeVector>,
    {
        vectors
            .into_iter()
            .fold(AttributeVector::ZERO, |acc, next| acc + *next)
    }

    /// Iterates `(attribute, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, f32)> + '_ {
        use strum::IntoEnumIterator;
        Attribute::iter().map(move |attribute| (attribute, self.get(attribute)))
    }
}

impl Add for AttributeVector {
    type Output = AttributeVector;

    fn add(mut self, rhs: AttributeVector) -> AttributeVector {
        use strum::IntoEnumIterator;
        for attribute in Attribute::iter() {
            *self.slot_mut(attribute) += rhs.get(attribute);
        }
        self.constant += rhs.constant;
        self
    }
}

impl<'a> Sum<&'a AttributeVector> for AttributeVector {
    fn sum<I: Iterator<Item = &'a AttributeVector>>(iter: I) -> Self {
        AttributeVector::sum(iter)
    }
}

impl Sum for AttributeVector {
    fn sum<I: Iterator<Item = AttributeVector>>(iter: I) -> Self {
        iter.fold(AttributeVector::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn sample(seed: f32) -> AttributeVector {
        Attribute::iter()
            .enumerate()
            .fold(AttributeVector::constant(seed), |acc, (i, attribute)| {
                acc.with(attribute, seed + i as f32)
            })
    }

    #[test]
    fn dot_adds_formula_constant_only() {
        let stats = AttributeVector::ZERO
            .with(Attribute::Strength, 10.0)
            .with_constant(100.0);
        let formula = AttributeVector::constant(3.0).with(Attribute::Strength, 0.5);

        assert_eq!(stats.dot(&formula), 8.0);
    }

    #[test]
    fn unit_stats_measure_intrinsic_power() {
        let formula = AttributeVector::constant(2.0)
            .with(Attribute::Dexterity, 1.5)
            .with(Attribute::Mana, 0.5);

        assert_eq!(AttributeVector::UNIT.dot(&formula), 4.0);
    }

    #[test]
    fn meets_requires_every_component() {
        let requirement = AttributeVector::ZERO
            .with(Attribute::Strength, 5.0)
            .with(Attribute::Mana, 2.0);
        let have = AttributeVector::ZERO
            .with(Attribute::Strength, 5.0)
            .with(Attribute::Mana, 2.0);

        assert!(have.meets(&requirement));

        for attribute in Attribute::iter() {
            let short = have.with(attribute, requirement.get(attribute) - 0.5);
            assert!(!short.meets(&requirement), "{attribute} deficiency ignored");
        }
    }

    #[test]
    fn meets_ignores_constant() {
        let requirement = AttributeVector::constant(50.0);
        assert!(AttributeVector::ZERO.meets(&requirement));
    }

    #[test]
    fn sum_is_associative_and_commutative() {
        let (a, b, c) = (sample(1.0), sample(-2.5), sample(4.0));

        let left = AttributeVector::sum([&AttributeVector::sum([&a, &b]), &c]);
        let right = AttributeVector::sum([&a, &AttributeVector::sum([&b, &c])]);
        assert_eq!(left, right);

        assert_eq!(AttributeVector::sum([&a, &b]), AttributeVector::sum([&b, &a]));
    }

    #[test]
    fn sum_of_nothing_is_zero() {
        assert_eq!(
            AttributeVector::sum(core::iter::empty()),
            AttributeVector::ZERO
        );
        assert_eq!(AttributeVector::sum([&sample(3.0)]), sample(3.0));
    }

    #[test]
    fn sum_includes_constant() {
        let total: AttributeVector = [AttributeVector::constant(1.5), AttributeVector::constant(2.0)]
            .iter()
            .sum();
        assert_eq!(total.constant, 3.5);
    }

    #[test]
    fn attribute_names_round_trip() {
        assert_eq!(Attribute::SlashResist.to_string(), "slash_resist");
        assert_eq!("MANA".parse::<Attribute>().ok(), Some(Attribute::Mana));
        assert_eq!(Attribute::iter().count(), Attribute::COUNT);
    }
}
