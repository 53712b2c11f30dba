//! Type descriptors.
//!
//! Descriptors are immutable once allocated and referenced by [`TypeId`].
//! A descriptor can only reference IDs allocated before it, so no type can
//! contain itself. Named type declarations share the descriptor ID rather
//! than copying it.

use std::fmt::{self, Write as _};

use crate::{Name, StringInterner};

/// Index of a type descriptor in a [`TypeArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    pub const INTEGER: TypeId = TypeId(0);
    pub const REAL: TypeId = TypeId(1);
    pub const BOOLEAN: TypeId = TypeId(2);
    pub const CHAR: TypeId = TypeId(3);
    pub const STRING: TypeId = TypeId(4);
    /// Placeholder produced after an unrecoverable syntax error.
    pub const ERROR: TypeId = TypeId(5);

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}

/// Predefined scalar types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ScalarKind {
    Integer,
    Real,
    Boolean,
    Char,
    String,
}

impl ScalarKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ScalarKind::Integer => "integer",
            ScalarKind::Real => "real",
            ScalarKind::Boolean => "boolean",
            ScalarKind::Char => "char",
            ScalarKind::String => "string",
        }
    }
}

/// The shape of a type descriptor.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeForm {
    Scalar(ScalarKind),
    /// `(a, b, c)`; constants take ordinals 0, 1, 2, ...
    Enumeration { constants: Vec<Name> },
    /// `min..max` over an ordinal base type. Char bounds are code points.
    Subrange { base: TypeId, min: i64, max: i64 },
    Array {
        index: TypeId,
        element: TypeId,
        count: i64,
    },
    /// `set of element`.
    Set { element: TypeId },
    Error,
}

/// Arena owning type descriptors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeArena {
    types: Vec<TypeForm>,
}

impl Default for TypeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeArena {
    /// Create an arena holding the predefined types at their fixed IDs.
    pub fn new() -> Self {
        TypeArena {
            types: vec![
                TypeForm::Scalar(ScalarKind::Integer),
                TypeForm::Scalar(ScalarKind::Real),
                TypeForm::Scalar(ScalarKind::Boolean),
                TypeForm::Scalar(ScalarKind::Char),
                TypeForm::Scalar(ScalarKind::String),
                TypeForm::Error,
            ],
        }
    }

    /// Allocate a descriptor.
    ///
    /// # Panics
    /// Panics if the arena exceeds `u32::MAX` descriptors.
    pub fn alloc(&mut self, form: TypeForm) -> TypeId {
        let id = u32::try_from(self.types.len())
            .unwrap_or_else(|_| panic!("type arena exceeded u32::MAX entries"));
        self.types.push(form);
        TypeId(id)
    }

    /// Get a descriptor by ID.
    #[inline]
    pub fn get(&self, id: TypeId) -> &TypeForm {
        &self.types[id.index()]
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Always false: predefined types are present from construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Element type of a set descriptor.
    pub fn set_element(&self, id: TypeId) -> Option<TypeId> {
        match self.get(id) {
            TypeForm::Set { element } => Some(*element),
            _ => None,
        }
    }

    /// Follow subranges down to their ordinal base type.
    pub fn base_type(&self, mut id: TypeId) -> TypeId {
        while let TypeForm::Subrange { base, .. } = self.get(id) {
            id = *base;
        }
        id
    }

    /// Number of values of an ordinal type usable as an array index.
    ///
    /// Returns `None` for types that are not bounded ordinals.
    pub fn ordinal_count(&self, id: TypeId) -> Option<i64> {
        match self.get(id) {
            TypeForm::Scalar(ScalarKind::Boolean) => Some(2),
            TypeForm::Scalar(ScalarKind::Char) => Some(256),
            TypeForm::Enumeration { constants } => i64::try_from(constants.len()).ok(),
            TypeForm::Subrange { min, max, .. } => max.checked_sub(*min)?.checked_add(1),
            TypeForm::Scalar(ScalarKind::Integer | ScalarKind::Real | ScalarKind::String)
            | TypeForm::Array { .. }
            | TypeForm::Set { .. }
            | TypeForm::Error => None,
        }
    }

    /// Render a descriptor as Pascal-like source text.
    pub fn describe(&self, id: TypeId, interner: &StringInterner) -> String {
        let mut out = String::new();
        self.write_type(&mut out, id, interner);
        out
    }

    fn write_type(&self, out: &mut String, id: TypeId, interner: &StringInterner) {
        match self.get(id) {
            TypeForm::Scalar(kind) => out.push_str(kind.as_str()),
            TypeForm::Enumeration { constants } => {
                out.push('(');
                for (i, name) in constants.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(interner.lookup(*name));
                }
                out.push(')');
            }
            TypeForm::Subrange { base, min, max } => {
                if self.base_type(*base) == TypeId::CHAR {
                    let show = |n: i64| {
                        u32::try_from(n)
                            .ok()
                            .and_then(char::from_u32)
                            .unwrap_or(char::REPLACEMENT_CHARACTER)
                    };
                    let _ = write!(out, "'{}'..'{}'", show(*min), show(*max));
                } else {
                    let _ = write!(out, "{min}..{max}");
                }
            }
            TypeForm::Array { index, element, .. } => {
                out.push_str("array [");
                self.write_type(out, *index, interner);
                out.push_str("] of ");
                self.write_type(out, *element, interner);
            }
            TypeForm::Set { element } => {
                out.push_str("set of ");
                self.write_type(out, *element, interner);
            }
            TypeForm::Error => out.push_str("<error>"),
        }
    }
}
