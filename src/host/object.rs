//! host::object
//!
//! Host-side references to bound objects.
//!
//! An [`ObjectRef`] is the host's handle on a [`BoundObject`]. Cloning it
//! adds a reference; the bound object is released when the last reference
//! drops. The host may also request release early through
//! [`ObjectRef::release`], any number of times.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::bindings::{BindingError, BoundObject, ForeignObject, RepositoryHandle};
use crate::host::Value;

/// A reference-counted handle on a bound object.
///
/// Not `Send`: a bound object belongs to the single host thread that
/// created it.
#[derive(Clone)]
pub struct ObjectRef(Rc<RefCell<BoundObject>>);

impl ObjectRef {
    /// Register a new bound object.
    pub fn new(object: impl Into<BoundObject>) -> Self {
        Self(Rc::new(RefCell::new(object.into())))
    }

    pub fn type_name(&self) -> &'static str {
        self.0.borrow().type_name()
    }

    pub fn describe(&self) -> String {
        self.0.borrow().describe()
    }

    pub fn get_field(&self, name: &str) -> Result<Value, BindingError> {
        self.0.borrow().get_field(name)
    }

    pub fn invoke(&self, args: &[Value]) -> Result<Option<Value>, BindingError> {
        self.0.borrow().invoke(args)
    }

    /// Release the object's native resources now. Safe to repeat.
    pub fn release(&self) {
        self.0.borrow_mut().release();
    }

    pub fn is_released(&self) -> bool {
        self.0.borrow().is_released()
    }

    /// Number of live host references.
    pub fn ref_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    /// Whether both references point at the same object.
    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Run `f` against the repository this reference points at.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::InvalidArgumentType`] if the object is not a
    /// repository, otherwise whatever `f` returns.
    pub fn with_repository<T>(
        &self,
        f: impl FnOnce(&RepositoryHandle) -> Result<T, BindingError>,
    ) -> Result<T, BindingError> {
        let object = self.0.borrow();
        match object.as_repository() {
            Some(repo) => f(repo),
            None => Err(BindingError::InvalidArgumentType {
                expected: RepositoryHandle::TYPE_NAME,
                found: object.type_name(),
            }),
        }
    }

    /// Run `f` against the bound object, whatever its type.
    pub fn with_object<T>(&self, f: impl FnOnce(&BoundObject) -> T) -> T {
        f(&self.0.borrow())
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectRef").field(&self.describe()).finish()
    }
}
