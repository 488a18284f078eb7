//! host
//!
//! The host runtime surface the bindings are consumed through.
//!
//! # Architecture
//!
//! A scripting runtime reaches the bindings through three things:
//!
//! - [`Value`] - scalars, strings, byte vectors, and bound objects
//! - [`CallContext`] - arguments in, at most one result out
//! - [`Host`] - a registry of named builtins plus generic object operations
//!   (field access, display, invocation, release) dispatched through the
//!   foreign object protocol
//!
//! Execution is single-threaded and call-and-return: each builtin runs to
//! completion before control returns to the host.
//!
//! # Example
//!
//! ```no_run
//! use gitbind::host::{Host, HostOptions, Value};
//!
//! let host = Host::new(HostOptions::default());
//! let repo = host
//!     .call("git_repository_open", &[Value::from("/tmp/demo.git")])?
//!     .unwrap();
//! let blob = host
//!     .call(
//!         "git_blob_lookup",
//!         &[repo, Value::from("e69de29bb2d1d6434b8b29ae775ad8c2e48c5391")],
//!     )?
//!     .unwrap();
//! println!("{}", host.describe(&blob));
//! # Ok::<(), gitbind::host::HostError>(())
//! ```

mod call;
mod object;
mod value;

pub use call::CallContext;
pub use object::ObjectRef;
pub use value::Value;

use std::collections::BTreeMap;

use thiserror::Error;

use crate::bindings::BindingError;
use crate::core::config::Config;

/// A builtin callable from host code.
pub type Builtin = fn(&mut CallContext<'_>) -> Result<(), BindingError>;

/// Errors from host-level dispatch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("unknown builtin: {0}")]
    UnknownBuiltin(String),

    #[error(transparent)]
    Binding(#[from] BindingError),
}

/// Options every builtin can see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostOptions {
    /// Expand a leading `~` in repository paths
    pub expand_tilde: bool,
}

impl Default for HostOptions {
    fn default() -> Self {
        Self { expand_tilde: true }
    }
}

impl From<&Config> for HostOptions {
    fn from(config: &Config) -> Self {
        Self {
            expand_tilde: config.expand_tilde(),
        }
    }
}

/// Builtin registry and generic object operations.
#[derive(Debug)]
pub struct Host {
    options: HostOptions,
    builtins: BTreeMap<&'static str, Builtin>,
}

impl Host {
    /// Create a host with the git builtins registered.
    pub fn new(options: HostOptions) -> Self {
        let mut host = Self::empty(options);
        crate::builtins::register(&mut host);
        host
    }

    /// Create a host with no builtins.
    pub fn empty(options: HostOptions) -> Self {
        Self {
            options,
            builtins: BTreeMap::new(),
        }
    }

    pub fn options(&self) -> &HostOptions {
        &self.options
    }

    /// Register `builtin` under `name`, replacing any earlier registration.
    pub fn register(&mut self, name: &'static str, builtin: Builtin) {
        self.builtins.insert(name, builtin);
    }

    /// Registered builtin names, sorted.
    pub fn builtin_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.builtins.keys().copied()
    }

    /// Call builtin `name` with `args`.
    ///
    /// Returns `Ok(None)` when the builtin produced no value.
    ///
    /// # Errors
    ///
    /// - [`HostError::UnknownBuiltin`] if nothing is registered under `name`
    /// - [`HostError::Binding`] for any failure raised by the builtin
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Option<Value>, HostError> {
        let (&name, builtin) = self
            .builtins
            .get_key_value(name)
            .ok_or_else(|| HostError::UnknownBuiltin(name.to_string()))?;

        let mut ctx = CallContext::new(name, args, &self.options);
        builtin(&mut ctx)?;
        Ok(ctx.into_result())
    }

    /// Member access: `value.name`.
    pub fn field(&self, value: &Value, name: &str) -> Result<Value, HostError> {
        Ok(expect_object(value)?.get_field(name)?)
    }

    /// Invocation: `value(args...)`.
    pub fn invoke(&self, value: &Value, args: &[Value]) -> Result<Option<Value>, HostError> {
        Ok(expect_object(value)?.invoke(args)?)
    }

    /// Release the object behind `value` now. A no-op for non-objects.
    pub fn release(&self, value: &Value) {
        if let Value::Object(obj) = value {
            obj.release();
        }
    }

    /// Display form of any value.
    pub fn describe(&self, value: &Value) -> String {
        value.to_string()
    }
}

fn expect_object(value: &Value) -> Result<&ObjectRef, BindingError> {
    value
        .as_object()
        .ok_or(BindingError::InvalidArgumentType {
            expected: "bound object",
            found: value.type_name(),
        })
}
