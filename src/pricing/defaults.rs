//! Documented pricing defaults and caller-override resolution.
//!
//! Every constant here is a literal from the estimating methodology, not
//! a derived value. Callers override the financial ones through
//! [`CompanyFinancials`]; the operational ones (shift length, operating
//! days, road speed) are fixed assumptions of the model.

use crate::types::CompanyFinancials;

pub const DEFAULT_LOADS_PER_DAY: f64 = 50.0;
pub const DEFAULT_MILES_PER_LOAD: f64 = 50.0;
pub const OPERATING_DAYS_PER_MONTH: f64 = 22.0;

/// Assumed average road speed for short-haul drayage, including yard and
/// dock time. Drives hours-per-load.
pub const AVERAGE_ROAD_SPEED_MPH: f64 = 12.5;
pub const SHIFT_HOURS: f64 = 10.0;
pub const MONTHLY_HOURS_PER_FTE: f64 = 176.0;
pub const DRIVERS_PER_DISPATCHER: f64 = 20.0;

pub const DEFAULT_DRIVER_WAGE: f64 = 25.0;
pub const DEFAULT_DISPATCHER_WAGE: f64 = 22.0;
pub const DEFAULT_SUPERVISOR_WAGE: f64 = 32.0;
pub const DEFAULT_FRINGE_RATE: f64 = 0.30;

pub const DEFAULT_FUEL_PRICE_PER_GALLON: f64 = 3.75;
pub const DEFAULT_MILES_PER_GALLON: f64 = 6.5;

pub const DEFAULT_MAINTENANCE_MONTHLY: f64 = 2_500.0;
pub const DEFAULT_BACKUP_RENTAL_MONTHLY: f64 = 1_500.0;

pub const DEFAULT_OVERHEAD_RATE: f64 = 0.378;
pub const OVERHEAD_ADMINISTRATIVE_SHARE: f64 = 0.21;
pub const OVERHEAD_FACILITIES_SHARE: f64 = 0.18;
pub const OVERHEAD_OPERATIONS_SHARE: f64 = 0.52;
pub const OVERHEAD_MARKETING_SHARE: f64 = 0.09;

pub const DEFAULT_PROFIT_TARGET: f64 = 0.10;
pub const FIXED_PRICE_PROFIT_PREMIUM: f64 = 0.02;
pub const COST_PLUS_PROFIT_DISCOUNT: f64 = 0.02;
pub const PROFIT_RATE_FLOOR: f64 = 0.08;
pub const PROFIT_RATE_CEILING: f64 = 0.15;

/// Reference market average revenue per load for competitive positioning.
pub const MARKET_AVERAGE_PER_LOAD: f64 = 450.0;

/// Caller overrides merged over the defaults. Resolved once at the start
/// of a calculation so every later step reads plain numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedFinancials {
    pub driver_wage: f64,
    pub dispatcher_wage: f64,
    pub supervisor_wage: f64,
    pub fringe_rate: f64,
    pub fuel_price_per_gallon: f64,
    pub miles_per_gallon: f64,
    pub overhead_rate: f64,
    pub profit_target: f64,
    pub maintenance_monthly: f64,
    pub backup_rental_monthly: f64,
}

impl ResolvedFinancials {
    pub fn resolve(overrides: Option<&CompanyFinancials>) -> Self {
        let f = overrides.cloned().unwrap_or_default();
        ResolvedFinancials {
            driver_wage: f.driver_wage.unwrap_or(DEFAULT_DRIVER_WAGE),
            dispatcher_wage: f.dispatcher_wage.unwrap_or(DEFAULT_DISPATCHER_WAGE),
            supervisor_wage: f.supervisor_wage.unwrap_or(DEFAULT_SUPERVISOR_WAGE),
            fringe_rate: f.fringe_benefit_rate.unwrap_or(DEFAULT_FRINGE_RATE),
            fuel_price_per_gallon: f
                .fuel_price_per_gallon
                .unwrap_or(DEFAULT_FUEL_PRICE_PER_GALLON),
            miles_per_gallon: f.miles_per_gallon.unwrap_or(DEFAULT_MILES_PER_GALLON),
            overhead_rate: f.overhead_rate.unwrap_or(DEFAULT_OVERHEAD_RATE),
            profit_target: f.profit_margin_target.unwrap_or(DEFAULT_PROFIT_TARGET),
            maintenance_monthly: f.maintenance_monthly.unwrap_or(DEFAULT_MAINTENANCE_MONTHLY),
            backup_rental_monthly: f
                .backup_rental_monthly
                .unwrap_or(DEFAULT_BACKUP_RENTAL_MONTHLY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_win_and_gaps_fall_back() {
        let financials = CompanyFinancials {
            driver_wage: Some(30.0),
            ..CompanyFinancials::default()
        };
        let resolved = ResolvedFinancials::resolve(Some(&financials));
        assert_eq!(resolved.driver_wage, 30.0);
        assert_eq!(resolved.overhead_rate, DEFAULT_OVERHEAD_RATE);
    }
}
