//! host::call
//!
//! Per-call context handed to builtins.
//!
//! A builtin reads its arguments, then either pushes one result or pushes
//! nothing. "Nothing pushed" is how the tolerant calling convention signals
//! that no value was produced.

use crate::bindings::BindingError;
use crate::host::{HostOptions, Value};

/// Arguments, options, and the result slot for one builtin call.
#[derive(Debug)]
pub struct CallContext<'a> {
    name: &'static str,
    args: &'a [Value],
    options: &'a HostOptions,
    result: Option<Value>,
}

impl<'a> CallContext<'a> {
    pub fn new(name: &'static str, args: &'a [Value], options: &'a HostOptions) -> Self {
        Self {
            name,
            args,
            options,
            result: None,
        }
    }

    /// Name the builtin was registered under.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn argc(&self) -> usize {
        self.args.len()
    }

    /// Argument `index`, counting from the first.
    pub fn arg(&self, index: usize) -> &'a Value {
        self.args.get(index).unwrap_or(&Value::Void)
    }

    pub fn options(&self) -> &'a HostOptions {
        self.options
    }

    /// Fail unless the argument count is within `min..=max`.
    ///
    /// `expected` is the human-readable form used in the error message.
    pub fn expect_args(
        &self,
        min: usize,
        max: usize,
        expected: &'static str,
    ) -> Result<(), BindingError> {
        let got = self.argc();
        if got < min || got > max {
            return Err(BindingError::InvalidArgumentCount {
                builtin: self.name,
                expected,
                got,
            });
        }
        Ok(())
    }

    /// Set the call's result, replacing any earlier one.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.result = Some(value.into());
    }

    /// Discard the call's result, if any.
    pub fn drop_result(&mut self) -> Option<Value> {
        self.result.take()
    }

    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    pub fn into_result(self) -> Option<Value> {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_is_void() {
        let options = HostOptions::default();
        let args = [Value::Int(1)];
        let ctx = CallContext::new("f", &args, &options);
        assert_eq!(ctx.arg(0), &Value::Int(1));
        assert_eq!(ctx.arg(5), &Value::Void);
    }

    #[test]
    fn expect_args_bounds() {
        let options = HostOptions::default();
        let args = [Value::Void, Value::Void];
        let ctx = CallContext::new("f", &args, &options);
        assert!(ctx.expect_args(2, 3, "2 or 3").is_ok());
        assert_eq!(
            ctx.expect_args(1, 1, "1").unwrap_err(),
            BindingError::InvalidArgumentCount {
                builtin: "f",
                expected: "1",
                got: 2
            }
        );
    }

    #[test]
    fn push_and_drop() {
        let options = HostOptions::default();
        let mut ctx = CallContext::new("f", &[], &options);
        assert!(!ctx.has_result());
        ctx.push("x");
        assert!(ctx.has_result());
        assert_eq!(ctx.drop_result(), Some(Value::from("x")));
        assert_eq!(ctx.into_result(), None);
    }
}
