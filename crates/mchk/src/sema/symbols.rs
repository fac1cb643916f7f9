//! Flat symbol table for one semantic pass

use std::collections::HashMap;
use std::fmt;

/// Declared type of a variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarType {
    Int,
    Float,
}

impl VarType {
    /// Map a type keyword to its declared type
    pub fn from_keyword(text: &str) -> Option<Self> {
        match text {
            "int" => Some(VarType::Int),
            "float" => Some(VarType::Float),
            _ => None,
        }
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VarType::Int => "int",
            VarType::Float => "float",
        })
    }
}

/// A declared variable
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub ty: VarType,
}

/// Name to declared type, for a single analysis run
///
/// No scoping: one flat table per pass, discarded when the pass returns.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a declaration
    ///
    /// A second declaration of an existing name is an error and never
    /// overwrites the stored type.
    pub fn declare(&mut self, name: &str, ty: VarType) -> Result<(), String> {
        if self.symbols.contains_key(name) {
            return Err(format!("variable '{}' already declared", name));
        }
        self.symbols.insert(
            name.to_string(),
            Symbol {
                name: name.to_string(),
                ty,
            },
        );
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
