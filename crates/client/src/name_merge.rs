//! Entry-name merging helpers for Splunk list endpoints.
//!
//! Responsibilities:
//! - Splunk list endpoints return the resource name at `entry[].name`, not inside `entry[].content`.
//! - This module centralizes the logic to copy `entry.name` into the deserialized content model.
//!
//! Explicitly does NOT handle:
//! - Any other normalization (type coercion, field defaults beyond the `name` field).
//!
//! Invariants / assumptions:
//! - The entry name always wins over any `name` field found in content.
//! - This is crate-internal glue; it is not part of the public API contract.

use crate::models::{Index, Macro, NativeFiredAlert, SavedSearch};

pub(crate) trait HasName {
    fn set_name(&mut self, name: String);
}

pub(crate) fn attach_entry_name<T: HasName>(entry_name: String, mut content: T) -> T {
    content.set_name(entry_name);
    content
}

macro_rules! impl_has_name {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl HasName for $ty {
                fn set_name(&mut self, name: String) {
                    self.name = name;
                }
            }
        )+
    };
}

impl_has_name!(SavedSearch, Index, Macro, NativeFiredAlert);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_entry_name_sets_name() {
        let index = Index {
            name: String::new(),
            disabled: false,
        };

        let index = attach_entry_name("main".to_string(), index);
        assert_eq!(index.name, "main");
    }

    #[test]
    fn test_entry_name_overrides_content_name() {
        let mac = Macro {
            name: "stale".to_string(),
            definition: "index=okta".to_string(),
            disabled: false,
        };
        let mac = attach_entry_name("okta_logs".to_string(), mac);
        assert_eq!(mac.name, "okta_logs");
    }
}
