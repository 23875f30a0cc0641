//! Field assignment dispatch for `#[derive(EnvCfg)]`.
//!
//! Generated `assign` methods call `assign_literal` on a `&mut FieldSlot`.
//! Method resolution tries [`CoerceField`] first, which only applies when
//! the field type implements [`Coerce`]. Any other type resolves to
//! [`UnsupportedField`] through auto-referencing and reports its declared
//! type without touching the field. The choice follows the real type, so
//! aliases of supported types bind and look-alikes of them do not.

use crate::coerce::{Coerce, coerce_into};
use crate::error::AssignError;

/// A field of a record being bound, with its declared type name.
pub struct FieldSlot<'a, T> {
    value: &'a mut T,
    type_name: &'static str,
}

impl<'a, T> FieldSlot<'a, T> {
    /// Wraps `value`, declared as `type_name` in the record.
    #[must_use]
    pub const fn new(value: &'a mut T, type_name: &'static str) -> Self {
        Self { value, type_name }
    }
}

/// Assignment for fields whose type has a coercion rule.
pub trait CoerceField {
    /// Converts `literal` and stores it in the field.
    ///
    /// # Errors
    ///
    /// Returns [`AssignError::Parse`] when the conversion fails.
    fn assign_literal(self, literal: &str) -> Result<(), AssignError>;
}

impl<T: Coerce> CoerceField for &mut FieldSlot<'_, T> {
    fn assign_literal(self, literal: &str) -> Result<(), AssignError> {
        coerce_into(&mut *self.value, literal)
    }
}

/// Fallback for fields whose type has no coercion rule.
pub trait UnsupportedField {
    /// Reports the declared type as unsupported.
    ///
    /// # Errors
    ///
    /// Always returns [`AssignError::UnsupportedType`].
    fn assign_literal(&self, literal: &str) -> Result<(), AssignError>;
}

impl<T> UnsupportedField for FieldSlot<'_, T> {
    fn assign_literal(&self, _literal: &str) -> Result<(), AssignError> {
        Err(AssignError::UnsupportedType {
            type_name: self.type_name,
        })
    }
}
