use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::utils::qualified_name;

/// A zero-based position in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// A range between two positions, end inclusive of its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// A range covering whole lines `start..=end`.
    pub fn lines(start: usize, end: usize) -> Self {
        Self {
            start: Position::new(start, 0),
            end: Position::new(end, 0),
        }
    }
}

/// Kind of a symbol reported by a symbol provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolKind {
    Package,
    Struct,
    Interface,
    Function,
    Method,
    Field,
    Variable,
    Constant,
    Class,
    TypeParameter,
    /// Any kind the provider reports that we don't care about
    Other,
}

impl SymbolKind {
    /// Returns the kind as the provider spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Package => "Package",
            SymbolKind::Struct => "Struct",
            SymbolKind::Interface => "Interface",
            SymbolKind::Function => "Function",
            SymbolKind::Method => "Method",
            SymbolKind::Field => "Field",
            SymbolKind::Variable => "Variable",
            SymbolKind::Constant => "Constant",
            SymbolKind::Class => "Class",
            SymbolKind::TypeParameter => "TypeParameter",
            SymbolKind::Other => "Other",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SymbolKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "package" | "module" | "namespace" => SymbolKind::Package,
            "struct" => SymbolKind::Struct,
            "interface" => SymbolKind::Interface,
            "function" => SymbolKind::Function,
            "method" => SymbolKind::Method,
            "field" => SymbolKind::Field,
            "variable" => SymbolKind::Variable,
            "constant" => SymbolKind::Constant,
            "class" => SymbolKind::Class,
            "typeparameter" => SymbolKind::TypeParameter,
            _ => SymbolKind::Other,
        })
    }
}

/// A symbol as reported by a document or workspace symbol provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub range: Range,
    /// Package or namespace the symbol lives in, if the provider knows it
    pub container_name: Option<String>,
}

impl Symbol {
    pub fn new(name: impl Into<String>, kind: SymbolKind, range: Range) -> Self {
        Self {
            name: name.into(),
            kind,
            range,
            container_name: None,
        }
    }

    pub fn in_container(mut self, container: impl Into<String>) -> Self {
        self.container_name = Some(container.into());
        self
    }
}

/// An interface offered to the user for implementation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterfaceCandidate {
    pub name: String,
    /// Package path, e.g. `io`
    pub container_path: Option<String>,
}

impl InterfaceCandidate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            container_path: None,
        }
    }

    pub fn in_package(mut self, container: impl Into<String>) -> Self {
        let container = container.into();
        self.container_path = (!container.is_empty()).then_some(container);
        self
    }

    /// `container.Name`, or just `Name` without a container.
    pub fn qualified_name(&self) -> String {
        qualified_name(self.container_path.as_deref(), &self.name)
    }
}

impl fmt::Display for InterfaceCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name())
    }
}

impl From<&Symbol> for InterfaceCandidate {
    fn from(symbol: &Symbol) -> Self {
        let candidate = InterfaceCandidate::new(&symbol.name);
        match symbol.container_name.as_deref() {
            Some(container) => candidate.in_package(container),
            None => candidate,
        }
    }
}
