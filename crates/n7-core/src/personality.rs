use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::constants::UNIT_BOUND;

/// Named trait vector. Traits are clamped to [-1, 1] at construction and
/// never change afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    name: String,
    traits: HashMap<String, f64>,
}

impl PersonalityProfile {
    pub fn new<I, K>(name: &str, traits: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            name: name.to_string(),
            traits: traits
                .into_iter()
                .map(|(k, v)| (k.into(), v.clamp(-UNIT_BOUND, UNIT_BOUND)))
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn trait_value(&self, name: &str) -> Option<f64> {
        self.traits.get(name).copied()
    }

    /// Σ over the context's keys of `trait · context value`, summed in key
    /// order. Traits the context does not mention contribute nothing.
    pub fn match_score(&self, context: &BTreeMap<String, f64>) -> f64 {
        context
            .iter()
            .map(|(t, c)| self.traits.get(t).copied().unwrap_or(0.0) * c)
            .sum()
    }
}

/// Ordered collection of profiles. Duplicate names are allowed.
#[derive(Clone, Debug, Default)]
pub struct PersonalitySet {
    profiles: Vec<PersonalityProfile>,
}

impl PersonalitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, profile: PersonalityProfile) {
        self.profiles.push(profile);
    }

    /// Profile with the highest match score and that score. On ties the
    /// earliest-registered profile wins. `None` when the set is empty.
    pub fn best_match(
        &self,
        context: &BTreeMap<String, f64>,
    ) -> Option<(&PersonalityProfile, f64)> {
        let mut best: Option<(&PersonalityProfile, f64)> = None;
        for profile in &self.profiles {
            let score = profile.match_score(context);
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((profile, score)),
            }
        }
        best
    }

    pub fn iter(&self) -> impl Iterator<Item = &PersonalityProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
