//! Fiscal period state machine.
//!
//! Open → Closed → Locked, with Closed → Open as the single allowed
//! backward transition. Locked has no outgoing transitions.

use super::error::FiscalError;
use super::types::FiscalPeriodStatus;

/// Validates a period status transition.
///
/// # Errors
///
/// Returns `FiscalError::InvalidPeriodTransition` for any move outside
/// the allowed set, including same-status no-ops: close requires Open,
/// reopen requires Closed, lock requires Closed.
pub fn validate_transition(
    from: FiscalPeriodStatus,
    to: FiscalPeriodStatus,
) -> Result<(), FiscalError> {
    use FiscalPeriodStatus::{Closed, Locked, Open};

    match (from, to) {
        (Open, Closed) | (Closed, Open | Locked) => Ok(()),
        _ => Err(FiscalError::InvalidPeriodTransition { from, to }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FiscalPeriodStatus::Open, FiscalPeriodStatus::Closed)]
    #[case(FiscalPeriodStatus::Closed, FiscalPeriodStatus::Open)]
    #[case(FiscalPeriodStatus::Closed, FiscalPeriodStatus::Locked)]
    fn test_allowed_transitions(
        #[case] from: FiscalPeriodStatus,
        #[case] to: FiscalPeriodStatus,
    ) {
        assert!(validate_transition(from, to).is_ok());
    }

    #[rstest]
    #[case(FiscalPeriodStatus::Open, FiscalPeriodStatus::Locked)]
    #[case(FiscalPeriodStatus::Locked, FiscalPeriodStatus::Open)]
    #[case(FiscalPeriodStatus::Locked, FiscalPeriodStatus::Closed)]
    #[case(FiscalPeriodStatus::Open, FiscalPeriodStatus::Open)]
    #[case(FiscalPeriodStatus::Closed, FiscalPeriodStatus::Closed)]
    #[case(FiscalPeriodStatus::Locked, FiscalPeriodStatus::Locked)]
    fn test_rejected_transitions(
        #[case] from: FiscalPeriodStatus,
        #[case] to: FiscalPeriodStatus,
    ) {
        assert!(matches!(
            validate_transition(from, to),
            Err(FiscalError::InvalidPeriodTransition { .. })
        ));
    }

    #[test]
    fn test_locked_is_terminal() {
        for to in [
            FiscalPeriodStatus::Open,
            FiscalPeriodStatus::Closed,
            FiscalPeriodStatus::Locked,
        ] {
            assert!(validate_transition(FiscalPeriodStatus::Locked, to).is_err());
        }
    }
}
