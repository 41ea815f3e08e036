//! Travel reimbursement tariff
//!
//! The calculation is a pure function of (transport method, distance,
//! duration): a per-kilometre rate for reimbursable transport plus a flat
//! meal allowance for visits running longer than the threshold. Amounts are
//! returned exact; display rounding belongs to the presentation layer.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money};

use crate::transport::TransportMethod;
use crate::view::ClaimView;

/// Reimbursement rates for a trial programme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tariff {
    /// Rate per kilometre for car and taxi travel
    pub km_rate: Decimal,
    /// Flat meal allowance paid once per qualifying visit
    pub meal_allowance: Decimal,
    /// Visits strictly longer than this many hours qualify for the allowance
    pub meal_threshold_hours: u32,
    /// Currency amounts are denominated in
    pub currency: Currency,
}

impl Default for Tariff {
    /// The programme rates: 44 cents per kilometre and a $25.00 meal
    /// allowance for visits over 3 hours.
    fn default() -> Self {
        Self {
            km_rate: dec!(0.44),
            meal_allowance: dec!(25),
            meal_threshold_hours: 3,
            currency: Currency::AUD,
        }
    }
}

impl Tariff {
    /// Computes the reimbursement owed for a single visit
    ///
    /// Public transport is categorically ineligible, regardless of the
    /// distance recorded against the claim.
    pub fn reimbursement(
        &self,
        transport: TransportMethod,
        distance_km: u32,
        duration_hours: u32,
    ) -> Money {
        self.breakdown(transport, distance_km, duration_hours).total
    }

    /// Computes the per-line breakdown used on invoices
    pub fn breakdown(
        &self,
        transport: TransportMethod,
        distance_km: u32,
        duration_hours: u32,
    ) -> ReimbursementBreakdown {
        if !transport.is_reimbursable() {
            return ReimbursementBreakdown {
                travel: Money::zero(self.currency),
                meal: Money::zero(self.currency),
                total: Money::zero(self.currency),
            };
        }

        let travel = Money::new(self.km_rate * Decimal::from(distance_km), self.currency);
        let meal = if duration_hours > self.meal_threshold_hours {
            Money::new(self.meal_allowance, self.currency)
        } else {
            Money::zero(self.currency)
        };

        ReimbursementBreakdown {
            travel,
            meal,
            total: travel + meal,
        }
    }

    /// Convenience over any claim-shaped value
    pub fn for_claim<V: ClaimView>(&self, claim: &V) -> Money {
        self.reimbursement(
            claim.transport_method(),
            claim.distance_km(),
            claim.visit_duration_hours(),
        )
    }
}

/// Line-by-line reimbursement amounts for one visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReimbursementBreakdown {
    /// Distance component (kilometres x rate)
    pub travel: Money,
    /// Meal allowance component, zero below the threshold
    pub meal: Money,
    /// Sum of the components
    pub total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_claim_with_meal_allowance() {
        // 28 km x 0.44 + 25 = 37.32
        let amount = Tariff::default().reimbursement(TransportMethod::Car, 28, 5);
        assert_eq!(amount.amount(), dec!(37.32));
    }

    #[test]
    fn test_short_visit_has_no_meal_allowance() {
        let amount = Tariff::default().reimbursement(TransportMethod::Taxi, 22, 3);
        assert_eq!(amount.amount(), dec!(9.68));
    }

    #[test]
    fn test_meal_allowance_boundary() {
        let tariff = Tariff::default();
        // duration == 3 excludes the allowance, duration == 4 includes it
        assert_eq!(
            tariff.reimbursement(TransportMethod::Car, 10, 3).amount(),
            dec!(4.40)
        );
        assert_eq!(
            tariff.reimbursement(TransportMethod::Car, 10, 4).amount(),
            dec!(29.40)
        );
    }

    #[test]
    fn test_public_transport_is_always_zero() {
        let tariff = Tariff::default();
        assert!(tariff.reimbursement(TransportMethod::Public, 0, 2).is_zero());
        // distance recorded against a public claim is ignored
        assert!(tariff.reimbursement(TransportMethod::Public, 180, 8).is_zero());
    }

    #[test]
    fn test_breakdown_components() {
        let breakdown = Tariff::default().breakdown(TransportMethod::Car, 28, 5);
        assert_eq!(breakdown.travel.amount(), dec!(12.32));
        assert_eq!(breakdown.meal.amount(), dec!(25));
        assert_eq!(breakdown.total.amount(), dec!(37.32));
    }
}
