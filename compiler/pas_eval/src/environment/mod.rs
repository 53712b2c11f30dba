//! Run-time bindings from names to values.
//!
//! The front end has a single flat scope. Constants are normally folded by
//! the parser, but `true`, `false` and declared variables reach the
//! evaluator as `Variable` nodes and are resolved here.

use rustc_hash::FxHashMap;

use pas_ir::{
    ConstValue, Name, ScalarKind, StringInterner, SymbolKind, SymbolTable, TypeArena, TypeForm,
    TypeId,
};
use tracing::trace;

use crate::{IntSet, Value};

#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: FxHashMap<Name, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind every constant in `symbols` to its value and every variable to
    /// the default value of its type.
    ///
    /// Variables of array type, or whose type failed to parse, stay unbound.
    pub fn from_symbols(
        symbols: &SymbolTable,
        types: &TypeArena,
        interner: &StringInterner,
    ) -> Self {
        let mut env = Environment::new();
        for symbol in symbols.iter() {
            let value = match symbol.kind {
                SymbolKind::Constant { value, .. } => Some(constant_value(value, interner)),
                SymbolKind::Variable(ty) => default_value(types, ty),
                SymbolKind::Type(_) => None,
            };
            if let Some(value) = value {
                env.bind(symbol.name, value);
            }
        }
        env
    }

    /// Bind `name`, returning the value it replaces.
    pub fn bind(&mut self, name: Name, value: Value) -> Option<Value> {
        trace!(?name, ty = value.type_name(), "bind");
        self.bindings.insert(name, value)
    }

    /// The value currently bound to `name`.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<&Value> {
        self.bindings.get(&name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

fn constant_value(value: ConstValue, interner: &StringInterner) -> Value {
    match value {
        ConstValue::Integer(n) | ConstValue::Enum(n) => Value::Integer(n),
        ConstValue::Real(x) => Value::Real(x),
        ConstValue::Boolean(b) => Value::Boolean(b),
        ConstValue::Str(name) => Value::String(name),
        ConstValue::Char(c) => Value::String(interner.intern(c.encode_utf8(&mut [0; 4]))),
    }
}

/// Initial value of a variable of type `ty`.
fn default_value(types: &TypeArena, ty: TypeId) -> Option<Value> {
    match types.get(ty) {
        TypeForm::Scalar(ScalarKind::Integer) | TypeForm::Enumeration { .. } => {
            Some(Value::Integer(0))
        }
        TypeForm::Scalar(ScalarKind::Real) => Some(Value::Real(0.0)),
        TypeForm::Scalar(ScalarKind::Boolean) => Some(Value::Boolean(false)),
        TypeForm::Scalar(ScalarKind::Char | ScalarKind::String) => Some(Value::String(Name::EMPTY)),
        TypeForm::Subrange { min, .. } => Some(Value::Integer(*min)),
        TypeForm::Set { .. } => Some(Value::Set(IntSet::new())),
        TypeForm::Array { .. } | TypeForm::Error => None,
    }
}
