//! Pure parsing helpers for command-line values (no I/O, fully unit-testable).

use std::collections::BTreeMap;

use anyhow::{Context, Result, anyhow, bail};
use n7_core::PersonalityProfile;

/// Parse `name=value` into a trait/context pair.
pub fn parse_pair(s: &str) -> Result<(String, f64)> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| anyhow!("expected name=value, got '{s}'"))?;
    let name = name.trim();
    if name.is_empty() {
        bail!("empty name in '{s}'");
    }
    let value: f64 = value
        .trim()
        .parse()
        .with_context(|| format!("invalid number in '{s}'"))?;
    Ok((name.to_string(), value))
}

/// Collect repeated `--context name=value` flags. Later keys override earlier.
pub fn parse_context(pairs: &[String]) -> Result<BTreeMap<String, f64>> {
    pairs.iter().map(|p| parse_pair(p)).collect()
}

/// Parse `name:trait=v,trait=v`. A bare `name` yields a profile with no traits.
pub fn parse_personality(s: &str) -> Result<PersonalityProfile> {
    let (name, traits) = match s.split_once(':') {
        Some((name, traits)) => (name.trim(), traits),
        None => (s.trim(), ""),
    };
    if name.is_empty() {
        bail!("personality needs a name: '{s}'");
    }
    let traits = traits
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(parse_pair)
        .collect::<Result<Vec<_>>>()?;
    Ok(PersonalityProfile::new(name, traits))
}

/// Parse `key:reward` for a memory store.
pub fn parse_memory(s: &str) -> Result<(String, f64)> {
    let (key, reward) = s
        .rsplit_once(':')
        .ok_or_else(|| anyhow!("expected key:reward, got '{s}'"))?;
    if key.is_empty() {
        bail!("empty memory key in '{s}'");
    }
    let reward: f64 = reward
        .trim()
        .parse()
        .with_context(|| format!("invalid reward in '{s}'"))?;
    Ok((key.to_string(), reward))
}
