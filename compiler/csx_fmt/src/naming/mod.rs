//! Binding Names
//!
//! Declared names are used verbatim. Anonymous bindings and labels get a
//! synthesized `var_$<n>` name the first time they are seen, keyed by
//! identity, so every later reference to the same binding agrees.
//!
//! The seed belongs to one name table and is never reset, so names stay
//! unique across successive renders through the same renderer.

use rustc_hash::FxHashMap;

use csx_ir::{LabelId, VarId};

/// Prefix of synthesized names.
pub const SYNTHETIC_PREFIX: &str = "var_$";

/// Identity of a nameable binding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NameKey {
    Var(VarId),
    Label(LabelId),
}

/// Identity-keyed table of synthesized names.
#[derive(Debug, Default)]
pub struct NameTable {
    names: FxHashMap<NameKey, String>,
    seed: u32,
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name for `key`: `declared` when non-empty, otherwise a stable
    /// synthesized name.
    pub fn name_for(&mut self, key: NameKey, declared: Option<&str>) -> String {
        if let Some(name) = declared.filter(|name| !name.is_empty()) {
            return name.to_owned();
        }
        if let Some(name) = self.names.get(&key) {
            return name.clone();
        }
        let name = format!("{SYNTHETIC_PREFIX}{}", self.seed);
        self.seed += 1;
        tracing::debug!(?key, %name, "synthesized binding name");
        self.names.insert(key, name.clone());
        name
    }

    /// Number of names synthesized so far.
    pub fn synthesized(&self) -> u32 {
        self.seed
    }
}
