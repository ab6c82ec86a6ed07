//! Symbol table for Agar
//!
//! Agar has a single, flat declaration space: there are no block or function scopes, and a name stays declared for
//! the rest of the validation run. The table exists to reject re-declaration; it never fabricates an entry on a
//! lookup miss and has no removal operation.

use std::collections::HashMap;

use thiserror::Error;

/// Unique identifier for symbols (declaration order).
pub type SymbolId = usize;

/// A declared variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    /// Canonical spelling of the declared type keyword (`int`, `float`, ...).
    pub declared_type: String,
    /// Line of the declaring identifier.
    pub line: usize,
}

/// Errors raised by symbol table mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    #[error("variable '{name}' already declared")]
    AlreadyDeclared { name: String, first_line: usize },
}

/// Flat symbol table owned by one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    by_name: HashMap<String, SymbolId>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` with its declared type.
    ///
    /// ## Errors
    /// Returns [`SymbolError::AlreadyDeclared`] if `name` is already bound; the existing binding is left untouched.
    pub fn insert(&mut self, name: &str, declared_type: &str, line: usize) -> Result<SymbolId, SymbolError> {
        if let Some(existing) = self.get(name) {
            return Err(SymbolError::AlreadyDeclared {
                name: name.to_string(),
                first_line: existing.line,
            });
        }

        let id = self.symbols.len();
        self.symbols.push(Symbol {
            name: name.to_string(),
            declared_type: declared_type.to_string(),
            line,
        });
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    /// Return `true` if `name` has been declared.
    pub fn exists(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Return the declared type of `name`, or `None` if it was never declared.
    pub fn type_of(&self, name: &str) -> Option<&str> {
        self.get(name).map(|s| s.declared_type.as_str())
    }

    /// Look up the full entry for `name`.
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.by_name.get(name).map(|&id| &self.symbols[id])
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate over entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut table = SymbolTable::new();
        assert!(table.is_empty());
        assert_eq!(table.insert("a", "int", 1), Ok(0));
        assert_eq!(table.insert("b", "float", 2), Ok(1));

        assert!(table.exists("a"));
        assert_eq!(table.type_of("a"), Some("int"));
        assert_eq!(table.type_of("b"), Some("float"));
        assert_eq!(table.get("b").map(|s| s.line), Some(2));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_lookup_miss_does_not_fabricate_entry() {
        let table = SymbolTable::new();
        assert_eq!(table.type_of("ghost"), None);
        assert!(!table.exists("ghost"));
        assert!(table.is_empty());
    }

    #[test]
    fn test_redeclaration_is_rejected_and_keeps_first_binding() {
        let mut table = SymbolTable::new();
        table.insert("x", "int", 1).unwrap();

        let err = table.insert("x", "string", 7).unwrap_err();
        assert_eq!(
            err,
            SymbolError::AlreadyDeclared {
                name: "x".to_string(),
                first_line: 1
            }
        );
        assert_eq!(err.to_string(), "variable 'x' already declared");
        assert_eq!(table.type_of("x"), Some("int"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_iter_in_declaration_order() {
        let mut table = SymbolTable::new();
        for (i, name) in ["z", "a", "m"].iter().enumerate() {
            table.insert(name, "bool", i + 1).unwrap();
        }
        let names: Vec<_> = table.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }
}
