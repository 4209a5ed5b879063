//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `TenantId` where an
//! `AccountId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(TenantId, "Unique identifier for a tenant organization.");
typed_id!(UserId, "Unique identifier for a user.");
typed_id!(AccountId, "Unique identifier for a chart of accounts entry.");
typed_id!(JournalEntryId, "Unique identifier for a journal entry.");
typed_id!(FiscalYearId, "Unique identifier for a fiscal year.");
typed_id!(FiscalPeriodId, "Unique identifier for a fiscal period.");
typed_id!(TaxFilingId, "Unique identifier for a tax filing.");
typed_id!(EmployeeId, "Unique identifier for an employee.");
typed_id!(PayrollRunId, "Unique identifier for a payroll run.");

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_typed_ids_are_distinct_types() {
        let tenant = TenantId::new();
        let account = AccountId::new();
        // Different wrappers around different UUIDs
        assert_ne!(tenant.into_inner(), account.into_inner());
    }

    #[test]
    fn test_display_round_trip() {
        let id = JournalEntryId::new();
        let parsed = JournalEntryId::from_str(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_from_uuid_preserves_value() {
        let uuid = Uuid::now_v7();
        let id = TaxFilingId::from_uuid(uuid);
        assert_eq!(id.into_inner(), uuid);
    }

    #[test]
    fn test_serde_transparent() {
        let id = TenantId::new();
        let json = serde_json::to_string(&id).unwrap();
        // Serializes as a bare UUID string, not a wrapper object
        assert_eq!(json, format!("\"{}\"", id.into_inner()));
    }
}
