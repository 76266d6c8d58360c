//! Strategy registry for discovery and instantiation.
//!
//! The registry keeps strategies in registration order, which is the order the
//! roster, the pairings and the results file follow.

use std::collections::HashMap;

use crate::error::{ArenaError, Result};
use crate::strategies::builtin_strategies;
use crate::strategy::StrategyDef;

#[derive(Debug, Default)]
pub struct StrategyRegistry {
    defs: Vec<StrategyDef>,
    by_name: HashMap<&'static str, usize>,
}

impl StrategyRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in catalogue pre-registered.
    pub fn with_builtins() -> Result<Self> {
        Self::from_defs(builtin_strategies())
    }

    /// Register every descriptor in order, stopping at the first duplicate name.
    pub fn from_defs<I>(defs: I) -> Result<Self>
    where
        I: IntoIterator<Item = StrategyDef>,
    {
        let mut registry = Self::new();
        for def in defs {
            registry.register(def)?;
        }
        Ok(registry)
    }

    /// Register a strategy. Names must be unique.
    pub fn register(&mut self, def: StrategyDef) -> Result<()> {
        if self.by_name.contains_key(def.name()) {
            return Err(ArenaError::DuplicateStrategy(def.name().to_string()));
        }
        self.by_name.insert(def.name(), self.defs.len());
        self.defs.push(def);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&StrategyDef> {
        self.by_name.get(name).map(|&i| &self.defs[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.defs.iter().map(|d| d.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StrategyDef> {
        self.defs.iter()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::{AlwaysDefect, TitForTat};

    #[test]
    fn test_registry_with_builtins() {
        let registry = StrategyRegistry::with_builtins().unwrap();
        assert_eq!(registry.len(), 20);
        assert!(registry.contains("TitForTat"));
        assert!(registry.get("Joss").is_some_and(|d| d.is_stochastic()));
        assert_eq!(registry.names()[0], "Calculator");
    }

    #[test]
    fn test_register_keeps_order() {
        let mut registry = StrategyRegistry::new();
        registry.register(StrategyDef::of::<TitForTat>()).unwrap();
        registry.register(StrategyDef::of::<AlwaysDefect>()).unwrap();
        assert_eq!(registry.names(), vec!["TitForTat", "AlwaysDefect"]);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = StrategyRegistry::with_builtins().unwrap();
        let err = registry.register(StrategyDef::of::<TitForTat>()).unwrap_err();
        assert!(matches!(err, ArenaError::DuplicateStrategy(ref name) if name == "TitForTat"));
        assert!(err.is_configuration());
        assert_eq!(registry.len(), 20);
    }

    #[test]
    fn test_from_defs_rejects_repeated_entry() {
        let defs = [
            StrategyDef::of::<TitForTat>(),
            StrategyDef::of::<AlwaysDefect>(),
            StrategyDef::of::<TitForTat>(),
        ];
        let err = StrategyRegistry::from_defs(defs).unwrap_err();
        assert!(matches!(err, ArenaError::DuplicateStrategy(ref name) if name == "TitForTat"));

        let registry = StrategyRegistry::from_defs(builtin_strategies()).unwrap();
        assert_eq!(registry.names(), StrategyRegistry::with_builtins().unwrap().names());
    }

    #[test]
    fn test_unknown_strategy() {
        let registry = StrategyRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("nonexistent").is_none());
    }
}
