//! Account creation and update validation.
//!
//! Pure validation rules; persistence-level uniqueness checks live in the
//! repository layer.

use super::error::CoaError;
use super::types::{Account, AccountPatch, NewAccount};

/// Validates a new account definition against its (optional) parent.
///
/// Rules:
/// - code and name are non-empty
/// - subtype belongs to the declared account type
/// - if a parent is given, the child's type must equal the parent's type
///
/// Returns the level the new account will occupy in the tree.
///
/// # Errors
///
/// Returns `CoaError` if any rule is violated.
pub fn validate_new_account(
    def: &NewAccount,
    parent: Option<&Account>,
) -> Result<i16, CoaError> {
    if def.code.trim().is_empty() {
        return Err(CoaError::EmptyCode);
    }
    if def.name.trim().is_empty() {
        return Err(CoaError::EmptyName);
    }

    if !def.sub_type.matches_type(def.account_type) {
        return Err(CoaError::SubTypeMismatch {
            account_type: def.account_type,
            sub_type: def.sub_type,
        });
    }

    match (def.parent_code.as_deref(), parent) {
        (Some(code), None) => Err(CoaError::ParentNotFound(code.to_string())),
        (Some(_), Some(parent)) => {
            if parent.account_type != def.account_type {
                return Err(CoaError::ParentTypeMismatch {
                    child: def.account_type,
                    parent: parent.account_type,
                });
            }
            Ok(parent.level + 1)
        }
        (None, _) => Ok(1),
    }
}

/// Validates an account patch against the existing account.
///
/// System accounts reject subtype changes; the code is immutable by
/// construction (the patch has no code field).
///
/// # Errors
///
/// Returns `CoaError` if the patch violates protection rules.
pub fn validate_patch(account: &Account, patch: &AccountPatch) -> Result<(), CoaError> {
    if let Some(name) = &patch.name {
        if name.trim().is_empty() {
            return Err(CoaError::EmptyName);
        }
    }

    if let Some(sub_type) = patch.sub_type {
        if account.is_system {
            return Err(CoaError::SystemAccountImmutable(account.code.clone()));
        }
        if !sub_type.matches_type(account.account_type) {
            return Err(CoaError::SubTypeMismatch {
                account_type: account.account_type,
                sub_type,
            });
        }
    }

    Ok(())
}

/// Validates that an account can be deactivated.
///
/// # Errors
///
/// Returns `CoaError::SystemAccountImmutable` for system accounts.
pub fn validate_deactivation(account: &Account) -> Result<(), CoaError> {
    if account.is_system {
        return Err(CoaError::SystemAccountImmutable(account.code.clone()));
    }
    Ok(())
}
