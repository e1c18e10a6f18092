//! Environment variable management for testing
//!
//! Tests that read process configuration override single variables through an
//! [`EnvVarGuard`], which puts the original value back when dropped.

use std::env;

/// Overrides one environment variable for the lifetime of the guard
pub struct EnvVarGuard {
  name: String,
  /// The original value, if any
  original: Option<String>,
}

impl EnvVarGuard {
  /// Remember the current value of `name` so it can be restored later
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      original: env::var(name).ok(),
    }
  }

  /// Set the variable to `value`
  pub fn set(&self, value: &str) {
    unsafe {
      env::set_var(&self.name, value);
    }
  }

  /// Unset the variable
  pub fn remove(&self) {
    unsafe {
      env::remove_var(&self.name);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    match &self.original {
      Some(val) => unsafe {
        env::set_var(&self.name, val);
      },
      None => unsafe {
        env::remove_var(&self.name);
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_guard_restores_unset_variable() {
    let name = "JIRA_MCP_TEST_UTILS_GUARD";
    {
      let guard = EnvVarGuard::new(name);
      guard.set("temporary");
      assert_eq!(env::var(name).as_deref(), Ok("temporary"));
    }
    assert!(env::var(name).is_err());
  }
}
