//! bindings::protocol
//!
//! The foreign object protocol.
//!
//! Every bound type implements [`ForeignObject`]; the host dispatches through
//! it without knowing the concrete type. The contract:
//!
//! - `release` frees native resources and is safe to call any number of
//!   times, including on an object whose construction never completed
//! - `describe` is side-effect free
//! - `invoke` fails with [`BindingError::NotCallable`] unless overridden
//! - `get_field` fails with [`BindingError::UnknownField`] for unknown names

use crate::bindings::BindingError;
use crate::host::Value;

/// Operations the host may perform on a bound object.
pub trait ForeignObject {
    /// Stable type name, e.g. `git_repository`.
    fn type_name(&self) -> &'static str;

    /// Free native resources. Idempotent.
    fn release(&mut self);

    /// Whether [`release`](Self::release) has run.
    fn is_released(&self) -> bool;

    /// Human-readable display form.
    fn describe(&self) -> String;

    /// Call the object as a function.
    fn invoke(&self, args: &[Value]) -> Result<Option<Value>, BindingError> {
        let _ = args;
        Err(BindingError::NotCallable {
            type_name: self.type_name(),
        })
    }

    /// Extract a named member.
    fn get_field(&self, name: &str) -> Result<Value, BindingError>;
}
