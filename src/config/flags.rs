use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Log every forward-chaining rule application.
pub const TRACE: &str = "trace";

/// Flag names the engines understand.
pub const FLAGS: [&str; 1] = [TRACE];

/// Names of the switched-on flags.  A flag that was never set is off.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagSet {
    enabled: BTreeSet<String>,
}

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch `name` on or off.  Returns whether the value changed.
    pub fn set(&mut self, name: &str, on: bool) -> bool {
        if on {
            self.enabled.insert(name.to_string())
        } else {
            self.enabled.remove(name)
        }
    }

    pub fn enable(&mut self, name: &str) -> bool {
        self.set(name, true)
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled.contains(name)
    }

    /// Enabled flags in name order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.enabled.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::{FlagSet, FLAGS, TRACE};

    #[test]
    fn unset_flags_read_as_off() {
        let mut flags = FlagSet::new();
        assert!(!flags.is_enabled(TRACE));
        assert!(flags.enable(TRACE));
        assert!(!flags.enable(TRACE));
        assert!(flags.is_enabled(TRACE));
        assert!(flags.set(TRACE, false));
        assert!(!flags.is_enabled(TRACE));
        assert!(FLAGS.contains(&TRACE));
    }

    #[test]
    fn iterates_enabled_names_in_order() {
        let mut flags = FlagSet::new();
        flags.enable("verbose");
        flags.enable(TRACE);
        flags.set("quiet", false);
        assert_eq!(flags.iter().collect::<Vec<_>>(), vec![TRACE, "verbose"]);
    }
}
