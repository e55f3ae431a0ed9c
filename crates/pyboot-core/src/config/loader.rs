//! Environment variable loading helpers.
//!
//! Fallback chains are maintained here so business code never repeats
//! `or_else` ladders over `std::env::var`.

use std::env;

/// Read from the primary key or an alias chain, falling back to a default.
pub fn env_or<F>(primary: &str, aliases: &[&str], default: F) -> String
where
    F: FnOnce() -> String,
{
    env::var(primary)
        .ok()
        .or_else(|| aliases.iter().find_map(|a| env::var(a).ok()))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(default)
}

/// Read from the primary key or an alias chain; empty values count as unset.
pub fn env_optional(primary: &str, aliases: &[&str]) -> Option<String> {
    env::var(primary)
        .ok()
        .or_else(|| aliases.iter().find_map(|a| env::var(a).ok()))
        .and_then(|s| {
            let s = s.trim().to_string();
            if s.is_empty() {
                None
            } else {
                Some(s)
            }
        })
}

/// Parse a boolean variable: 1/true/yes are true, 0/false/no/off are false.
pub fn env_bool(primary: &str, aliases: &[&str], default: bool) -> bool {
    let v = env::var(primary)
        .ok()
        .or_else(|| aliases.iter().find_map(|a| env::var(a).ok()));
    match v.as_deref() {
        Some(s) => !matches!(
            s.trim().to_lowercase().as_str(),
            "0" | "false" | "no" | "off"
        ),
        None => default,
    }
}

// All `env::set_var` / `remove_var` calls go through these wrappers; business
// code never mutates the process environment directly. Callers must only do
// so before any threads are spawned.

/// Set a single environment variable.
#[allow(unsafe_code)]
pub fn set_env_var(key: &str, value: &str) {
    unsafe { env::set_var(key, value) };
}

/// Remove a single environment variable.
#[allow(unsafe_code)]
pub fn remove_env_var(key: &str) {
    unsafe { env::remove_var(key) };
}

/// RAII guard: clears the named variable on drop via [`remove_env_var`].
pub struct ScopedEnvGuard(pub &'static str);

impl Drop for ScopedEnvGuard {
    fn drop(&mut self) {
        remove_env_var(self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own key so parallel execution cannot interfere.

    #[test]
    fn test_env_or_falls_back_to_default() {
        let v = env_or("PYBOOT_TEST_MISSING_A", &[], || "fallback".to_string());
        assert_eq!(v, "fallback");
    }

    #[test]
    fn test_env_or_reads_primary() {
        let _guard = ScopedEnvGuard("PYBOOT_TEST_PRIMARY_B");
        set_env_var("PYBOOT_TEST_PRIMARY_B", "value");
        let v = env_or("PYBOOT_TEST_PRIMARY_B", &[], || "fallback".to_string());
        assert_eq!(v, "value");
    }

    #[test]
    fn test_env_or_reads_alias() {
        let _guard = ScopedEnvGuard("PYBOOT_TEST_ALIAS_C");
        set_env_var("PYBOOT_TEST_ALIAS_C", "aliased");
        let v = env_or(
            "PYBOOT_TEST_MISSING_C",
            &["PYBOOT_TEST_ALIAS_C"],
            || "fallback".to_string(),
        );
        assert_eq!(v, "aliased");
    }

    #[test]
    fn test_env_optional_treats_blank_as_unset() {
        let _guard = ScopedEnvGuard("PYBOOT_TEST_BLANK_D");
        set_env_var("PYBOOT_TEST_BLANK_D", "   ");
        assert_eq!(env_optional("PYBOOT_TEST_BLANK_D", &[]), None);
    }

    #[test]
    fn test_env_bool_parses_false_spellings() {
        let _guard = ScopedEnvGuard("PYBOOT_TEST_BOOL_E");
        for s in ["0", "false", "no", "off", "FALSE"] {
            set_env_var("PYBOOT_TEST_BOOL_E", s);
            assert!(!env_bool("PYBOOT_TEST_BOOL_E", &[], true), "{s} should be false");
        }
        set_env_var("PYBOOT_TEST_BOOL_E", "1");
        assert!(env_bool("PYBOOT_TEST_BOOL_E", &[], false));
    }

    #[test]
    fn test_env_bool_uses_default_when_unset() {
        assert!(env_bool("PYBOOT_TEST_MISSING_F", &[], true));
        assert!(!env_bool("PYBOOT_TEST_MISSING_F", &[], false));
    }
}
