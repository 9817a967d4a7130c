//! Energy accounting shared by both precompile families.
//!
//! There is no wall-clock timeout in this subsystem (see the
//! concurrency notes): every invocation pre-charges a fixed cost, and
//! exhaustion is reported as `OUT_OF_NRG`. `TX_NRG_MAX` is supplied by
//! the VM per call rather than read from configuration — there is no
//! config file, environment variable, or CLI flag here.

use crate::ports::inbound::PrecompiledResult;

/// Fixed per-invocation cost for both the MSC engine and the TRS `use`
/// handler.
pub const COST: u64 = 21_000;

/// Default VM-supplied energy cap, used by the in-process test harness.
/// A real embedder passes its own cap into [`check_preconditions`].
pub const TX_NRG_MAX_DEFAULT: u64 = 20_000_000;

/// Checks the two energy preconditions common to every precompile entry
/// point, in order. Returns `Err` with the result to return immediately
/// if either fails.
pub fn check_preconditions(nrg_limit: u64, tx_nrg_max: u64) -> Result<(), PrecompiledResult> {
    if nrg_limit < COST {
        return Err(PrecompiledResult::out_of_nrg());
    }
    if nrg_limit > tx_nrg_max {
        return Err(PrecompiledResult::invalid_nrg_limit(nrg_limit));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_energy_below_cost() {
        let result = check_preconditions(COST - 1, TX_NRG_MAX_DEFAULT).unwrap_err();
        assert_eq!(result.code, crate::ports::inbound::ResultCode::OutOfNrg);
    }

    #[test]
    fn rejects_energy_above_cap() {
        let result = check_preconditions(TX_NRG_MAX_DEFAULT + 1, TX_NRG_MAX_DEFAULT).unwrap_err();
        assert_eq!(result.energy_remaining, TX_NRG_MAX_DEFAULT + 1);
    }

    #[test]
    fn accepts_energy_in_range() {
        assert!(check_preconditions(COST, TX_NRG_MAX_DEFAULT).is_ok());
    }
}
