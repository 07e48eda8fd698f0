use crate::errors::SaleError;
use crate::types::Allocation;

/// Converts `value` native base units into sale tokens at `rate`, capped at
/// `remaining`.
///
/// When the request exceeds the supply, the grant is clamped to `remaining`
/// and only `remaining / rate` is charged; the rest of `value` is handed back.
/// The charge rounds down, so a buyer never pays for tokens it does not receive.
/// A supply smaller than `rate` is still handed out; the charge is then zero
/// and the whole of `value` comes back.
pub fn allocate(value: i128, rate: i128, remaining: i128) -> Result<Allocation, SaleError> {
    if value <= 0 {
        return Err(SaleError::InvalidAmount);
    }
    if rate <= 0 {
        return Err(SaleError::InvalidRate);
    }
    if remaining <= 0 {
        return Err(SaleError::SupplyExhausted);
    }

    // An overflowing product is larger than any balance, so it clamps too.
    match value.checked_mul(rate) {
        Some(requested) if requested <= remaining => Ok(Allocation {
            tokens_granted: requested,
            value_accepted: value,
            value_refunded: 0,
        }),
        _ => {
            let value_accepted = remaining / rate;
            Ok(Allocation {
                tokens_granted: remaining,
                value_accepted,
                value_refunded: value - value_accepted,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grants_full_request_under_supply() {
        let a = allocate(10, 20, 7_500).unwrap();
        assert_eq!(a.tokens_granted, 200);
        assert_eq!(a.value_accepted, 10);
        assert_eq!(a.value_refunded, 0);
    }

    #[test]
    fn request_exactly_at_supply_is_not_clamped() {
        let a = allocate(5, 20, 100).unwrap();
        assert_eq!(a.tokens_granted, 100);
        assert_eq!(a.value_refunded, 0);
    }

    #[test]
    fn clamps_and_refunds_excess() {
        // 1 unit at rate 20 with 19 units left (7 decimals).
        let unit = 10_000_000i128;
        let a = allocate(unit, 20, 19 * unit).unwrap();
        assert_eq!(a.tokens_granted, 19 * unit);
        assert_eq!(a.value_accepted, 9_500_000);
        assert_eq!(a.value_refunded, 500_000);
    }

    #[test]
    fn truncates_accepted_value() {
        let a = allocate(10, 3, 10).unwrap();
        assert_eq!(a.tokens_granted, 10);
        assert_eq!(a.value_accepted, 3);
        assert_eq!(a.value_refunded, 7);
    }

    #[test]
    fn overflowing_request_clamps_to_supply() {
        let a = allocate(i128::MAX, 10, 1_000).unwrap();
        assert_eq!(a.tokens_granted, 1_000);
        assert_eq!(a.value_accepted, 100);
        assert_eq!(a.value_refunded, i128::MAX - 100);
    }

    #[test]
    fn empty_supply_fails() {
        assert_eq!(allocate(1, 10, 0), Err(SaleError::SupplyExhausted));
    }

    #[test]
    fn supply_below_rate_is_granted_without_charge() {
        let a = allocate(1, 20, 19).unwrap();
        assert_eq!(a.tokens_granted, 19);
        assert_eq!(a.value_accepted, 0);
        assert_eq!(a.value_refunded, 1);
    }

    #[test]
    fn charge_truncates_near_rate() {
        let a = allocate(2, 20, 39).unwrap();
        assert_eq!(a.tokens_granted, 39);
        assert_eq!(a.value_accepted, 1);
        assert_eq!(a.value_refunded, 1);
    }

    #[test]
    fn rejects_non_positive_inputs() {
        assert_eq!(allocate(0, 10, 100), Err(SaleError::InvalidAmount));
        assert_eq!(allocate(-5, 10, 100), Err(SaleError::InvalidAmount));
        assert_eq!(allocate(5, 0, 100), Err(SaleError::InvalidRate));
    }
}
