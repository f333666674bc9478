//! Where variable values are read from

use std::collections::{BTreeMap, HashMap};
use std::env::{self, VarError};

/// A name to value lookup, such as the process environment.
pub trait Source {
    /// Value of the variable `name`, or `None` if it is not set.
    fn get(&self, name: &str) -> Option<String>;
}

/// The environment of the current process.
///
/// Variables that are set but not valid unicode are treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Source for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        match env::var(name) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                tracing::warn!(name, "ignoring environment variable with non-unicode value");
                None
            }
        }
    }
}

impl Source for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

impl Source for BTreeMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        BTreeMap::get(self, name).cloned()
    }
}
