use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Named run counters kept by the engines.
///
/// Ordered by name so reports list them reproducibly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    counters: BTreeMap<String, u64>,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: u64) {
        self.counters.insert(name.into(), value);
    }

    pub fn increment(&mut self, name: impl Into<String>) -> u64 {
        self.increment_by(name, 1)
    }

    pub fn increment_by(&mut self, name: impl Into<String>, amount: u64) -> u64 {
        let entry = self.counters.entry(name.into()).or_insert(0);
        *entry += amount;
        *entry
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.counters.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counters.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Statistics;

    #[test]
    fn counters_increment() {
        let mut stats = Statistics::new();
        assert_eq!(stats.increment("rounds"), 1);
        assert_eq!(stats.increment_by("rounds", 4), 5);
        assert_eq!(stats.get("rounds"), Some(5));
        stats.set("facts_derived", 2);
        let names: Vec<_> = stats.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["facts_derived", "rounds"]);
        assert!(!stats.is_empty());
    }
}
