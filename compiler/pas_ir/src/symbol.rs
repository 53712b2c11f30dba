//! Symbol table for constants, types and variables.
//!
//! A single flat scope: the front end only handles declaration sections.
//! Predefined identifiers are entered first and may not be redefined.

use rustc_hash::FxHashMap;

use crate::{Name, Span, StringInterner, TypeId};

/// Value of a declared constant.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum ConstValue {
    Integer(i64),
    Real(f64),
    Char(char),
    Str(Name),
    Boolean(bool),
    /// Enumeration constant, stored by ordinal.
    Enum(i64),
}

impl ConstValue {
    /// Ordinal value for ordinal constants (integer, char, boolean, enum).
    pub fn ordinal(self) -> Option<i64> {
        match self {
            ConstValue::Integer(n) | ConstValue::Enum(n) => Some(n),
            ConstValue::Char(c) => Some(i64::from(u32::from(c))),
            ConstValue::Boolean(b) => Some(i64::from(b)),
            ConstValue::Real(_) | ConstValue::Str(_) => None,
        }
    }
}

/// What a symbol denotes.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum SymbolKind {
    Constant { value: ConstValue, ty: TypeId },
    Type(TypeId),
    Variable(TypeId),
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Symbol {
    pub name: Name,
    pub kind: SymbolKind,
    /// Declaration site; `Span::DUMMY` for predefined symbols.
    pub span: Span,
}

/// Index of a symbol in its table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SymbolId(u32);

#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    by_name: FxHashMap<Name, SymbolId>,
}

impl SymbolTable {
    /// An empty table with no predefined identifiers.
    pub fn new() -> Self {
        Self::default()
    }

    /// A table holding the predefined types and constants.
    pub fn with_predefined(interner: &StringInterner) -> Self {
        let mut table = SymbolTable::new();
        let predefined = [
            ("integer", SymbolKind::Type(TypeId::INTEGER)),
            ("real", SymbolKind::Type(TypeId::REAL)),
            ("boolean", SymbolKind::Type(TypeId::BOOLEAN)),
            ("char", SymbolKind::Type(TypeId::CHAR)),
            ("string", SymbolKind::Type(TypeId::STRING)),
            (
                "false",
                SymbolKind::Constant {
                    value: ConstValue::Boolean(false),
                    ty: TypeId::BOOLEAN,
                },
            ),
            (
                "true",
                SymbolKind::Constant {
                    value: ConstValue::Boolean(true),
                    ty: TypeId::BOOLEAN,
                },
            ),
            (
                "maxint",
                SymbolKind::Constant {
                    value: ConstValue::Integer(i64::MAX),
                    ty: TypeId::INTEGER,
                },
            ),
        ];
        for (text, kind) in predefined {
            let _ = table.define(Symbol {
                name: interner.intern(text),
                kind,
                span: Span::DUMMY,
            });
        }
        table
    }

    /// Enter a symbol.
    ///
    /// Returns the existing symbol's ID as the error if the name is already
    /// defined; the table is left unchanged in that case.
    pub fn define(&mut self, symbol: Symbol) -> Result<SymbolId, SymbolId> {
        if let Some(&existing) = self.by_name.get(&symbol.name) {
            return Err(existing);
        }
        let id = SymbolId(
            u32::try_from(self.symbols.len())
                .unwrap_or_else(|_| panic!("symbol table exceeded u32::MAX entries")),
        );
        self.by_name.insert(symbol.name, id);
        self.symbols.push(symbol);
        Ok(id)
    }

    pub fn lookup(&self, name: Name) -> Option<&Symbol> {
        self.by_name.get(&name).map(|id| self.get(*id))
    }

    #[inline]
    pub fn get(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.0 as usize]
    }

    /// Symbols in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_predefined_symbols() {
        let interner = StringInterner::new();
        let table = SymbolTable::with_predefined(&interner);

        let integer = table.lookup(interner.intern("integer"));
        assert_eq!(integer.map(|s| s.kind), Some(SymbolKind::Type(TypeId::INTEGER)));

        let truth = table.lookup(interner.intern("true"));
        assert_eq!(
            truth.map(|s| s.kind),
            Some(SymbolKind::Constant {
                value: ConstValue::Boolean(true),
                ty: TypeId::BOOLEAN
            })
        );
        assert!(table.lookup(interner.intern("digits")).is_none());
    }

    #[test]
    fn test_redefinition_rejected() {
        let interner = StringInterner::new();
        let mut table = SymbolTable::new();
        let name = interner.intern("limit");
        let first = table.define(Symbol {
            name,
            kind: SymbolKind::Constant {
                value: ConstValue::Integer(10),
                ty: TypeId::INTEGER,
            },
            span: Span::new(6, 11),
        });
        let Ok(first) = first else {
            panic!("first definition should succeed");
        };

        let second = table.define(Symbol {
            name,
            kind: SymbolKind::Variable(TypeId::REAL),
            span: Span::new(30, 35),
        });
        assert_eq!(second, Err(first));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(first).span, Span::new(6, 11));
    }

    #[test]
    fn test_const_ordinals() {
        assert_eq!(ConstValue::Char('a').ordinal(), Some(97));
        assert_eq!(ConstValue::Boolean(true).ordinal(), Some(1));
        assert_eq!(ConstValue::Enum(2).ordinal(), Some(2));
        assert_eq!(ConstValue::Real(1.5).ordinal(), None);
    }
}
