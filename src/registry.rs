//! src/registry.rs
//! Per-instance level name tables and silent-fallback level resolution.

use rustc_hash::FxHashMap;

use super::levels::{Level, mask};

/// A level reference as accepted by every gate and mutation operation.
///
/// Callers rarely construct this directly; the `From` impls let any call
/// site pass a [`Level`] tag, a name or numeric string, or a raw mask value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LevelRef {
    /// A base severity tag. Resolves to its bit value without a table lookup.
    Tag(Level),
    /// A name to look up, or a numeric string to parse if the lookup misses.
    Name(String),
    /// A raw mask value, passed through unchanged.
    Value(u32),
}

impl From<Level> for LevelRef {
    fn from(level: Level) -> Self {
        Self::Tag(level)
    }
}

impl From<&str> for LevelRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for LevelRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<u32> for LevelRef {
    fn from(value: u32) -> Self {
        Self::Value(value)
    }
}

/// The fixed base table: the eight severities plus the `none`/`all`
/// aggregates. Declaration order is the reverse-map insertion order.
const BASE: [(&str, u32); 10] = [
    ("none", mask::NONE),
    ("fatal", 1),
    ("error", 2),
    ("warn", 4),
    ("info", 8),
    ("debug", 16),
    ("verbose", 32),
    ("trace", 64),
    ("silly", 128),
    ("all", mask::ALL),
];

/// The two preset names with built-in default values.
const RESERVED_PRESETS: [&str; 2] = ["production", "development"];

/// Name/value tables for one logger instance.
///
/// The base table is an immutable constant shared by every instance; the
/// per-instance state is the override map (the two reserved presets plus any
/// caller-registered names) and the value-to-name reverse map used to find a
/// severity name back from a numeric level. Resolution consults overrides
/// before the base table.
#[derive(Clone, Debug)]
pub struct LevelRegistry {
    overrides: FxHashMap<String, u32>,
    reverse: FxHashMap<u32, String>,
}

impl LevelRegistry {
    /// Builds a registry from caller-supplied presets, in insertion order.
    ///
    /// `production` and `development` entries replace the built-in default
    /// values wholesale. Every other entry registers a new name and a
    /// reverse mapping; when two names share a value, the later registration
    /// wins in the reverse map.
    #[must_use]
    pub fn new(presets: &[(String, u32)]) -> Self {
        let reserved_value = |name: &str, default| {
            presets
                .iter()
                .rev()
                .find(|(n, _)| n == name)
                .map_or(default, |(_, v)| *v)
        };
        let production = reserved_value("production", mask::PRODUCTION);
        let development = reserved_value("development", mask::DEVELOPMENT);

        let mut overrides = FxHashMap::default();
        overrides.insert("production".to_owned(), production);
        overrides.insert("development".to_owned(), development);

        let mut reverse = FxHashMap::default();
        for (name, value) in BASE {
            reverse.insert(value, name.to_owned());
        }
        reverse.insert(production, "production".to_owned());
        reverse.insert(development, "development".to_owned());

        // Generic preset loop; the reserved names were already applied above
        // and must not be registered twice.
        for (name, value) in presets {
            if RESERVED_PRESETS.contains(&name.as_str()) {
                continue;
            }
            overrides.insert(name.clone(), *value);
            reverse.insert(*value, name.clone());
        }

        Self { overrides, reverse }
    }

    /// Resolves a level reference to a mask value.
    ///
    /// Known names (overrides first, then the base table) resolve to their
    /// bound value; unknown names that parse as an integer resolve to the
    /// parsed value; anything else resolves to `fallback`. Resolution never
    /// fails — malformed input degrades to the fallback by design.
    #[must_use]
    pub fn resolve(&self, level: &LevelRef, fallback: u32) -> u32 {
        match level {
            LevelRef::Tag(tag) => tag.bit(),
            LevelRef::Value(value) => *value,
            LevelRef::Name(name) => self
                .lookup(name)
                .or_else(|| name.parse::<u32>().ok())
                .unwrap_or(fallback),
        }
    }

    /// Returns `true` if `name` is registered (base, reserved, or custom).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Finds the registered name for a mask value, if any.
    #[must_use]
    pub fn name_of(&self, value: u32) -> Option<&str> {
        self.reverse.get(&value).map(String::as_str)
    }

    /// The full name-to-value table: base entries merged with overrides.
    #[must_use]
    pub fn name_table(&self) -> FxHashMap<String, u32> {
        let mut table: FxHashMap<String, u32> = BASE
            .iter()
            .map(|(name, value)| ((*name).to_owned(), *value))
            .collect();
        for (name, value) in &self.overrides {
            table.insert(name.clone(), *value);
        }
        table
    }

    /// The value-to-name reverse table.
    #[must_use]
    pub const fn reverse_table(&self) -> &FxHashMap<u32, String> {
        &self.reverse
    }

    fn lookup(&self, name: &str) -> Option<u32> {
        self.overrides.get(name).copied().or_else(|| {
            BASE.iter()
                .find(|(base_name, _)| *base_name == name)
                .map(|(_, value)| *value)
        })
    }
}

impl Default for LevelRegistry {
    fn default() -> Self {
        Self::new(&[])
    }
}
