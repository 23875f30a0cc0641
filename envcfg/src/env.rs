//! Environment namespaces consulted by the binder.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read-only string namespace queried by exact, case-sensitive key.
pub trait Environment {
    /// Returns the value stored under `key`, if any.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The process environment.
///
/// Variables whose value is not valid Unicode are treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        // Such names cannot exist in the environment and make the platform
        // lookup panic.
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        std::env::var(key).ok()
    }
}

impl<S: BuildHasher> Environment for HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl Environment for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

#[cfg(test)]
mod tests {
    use super::{Environment, ProcessEnv};
    use rstest::rstest;
    use std::collections::{BTreeMap, HashMap};

    #[test]
    fn maps_are_case_sensitive() {
        let env = HashMap::from([("HOST".to_owned(), "example".to_owned())]);
        assert_eq!(env.lookup("HOST").as_deref(), Some("example"));
        assert_eq!(env.lookup("host"), None);

        let sorted: BTreeMap<_, _> = env.into_iter().collect();
        assert_eq!(sorted.lookup("HOST").as_deref(), Some("example"));
    }

    #[rstest]
    #[case("")]
    #[case("A=B")]
    #[case("NUL\0KEY")]
    fn process_env_rejects_impossible_names(#[case] key: &str) {
        assert_eq!(ProcessEnv.lookup(key), None);
    }

    #[test]
    fn process_env_reads_variables() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("ENVCFG_PROCESS_ENV_PROBE", "present");
            assert_eq!(
                ProcessEnv.lookup("ENVCFG_PROCESS_ENV_PROBE").as_deref(),
                Some("present")
            );
            Ok(())
        });
    }
}
