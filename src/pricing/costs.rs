//! Direct materials, subcontractors, and indirect cost buildup.

use super::defaults::{
    ResolvedFinancials, OVERHEAD_ADMINISTRATIVE_SHARE, OVERHEAD_FACILITIES_SHARE,
    OVERHEAD_MARKETING_SHARE, OVERHEAD_OPERATIONS_SHARE,
};
use super::labor::VolumeEstimate;
use crate::types::{
    DirectCosts, FuelLine, IndirectCosts, LaborCosts, MaterialsCosts, SubcontractorCosts,
    SupplyLine,
};

/// Fuel plus the fixed monthly supplies basket.
pub fn direct_materials(volume: &VolumeEstimate, financials: &ResolvedFinancials) -> MaterialsCosts {
    let gallons = volume.monthly_miles() / financials.miles_per_gallon;
    let fuel = FuelLine {
        quantity: gallons,
        unit_price: financials.fuel_price_per_gallon,
        cost: gallons * financials.fuel_price_per_gallon,
    };

    let supplies = vec![
        SupplyLine {
            description: "Maintenance supplies".to_string(),
            cost: 500.0,
        },
        SupplyLine {
            description: "Safety equipment".to_string(),
            cost: 200.0,
        },
    ];

    let total = fuel.cost + supplies.iter().map(|s| s.cost).sum::<f64>();
    MaterialsCosts {
        fuel,
        supplies,
        total,
    }
}

pub fn subcontractors(financials: &ResolvedFinancials) -> SubcontractorCosts {
    let maintenance = SupplyLine {
        description: "Fleet maintenance contract".to_string(),
        cost: financials.maintenance_monthly,
    };
    let other = vec![SupplyLine {
        description: "Backup equipment rental".to_string(),
        cost: financials.backup_rental_monthly,
    }];

    let total = maintenance.cost + other.iter().map(|s| s.cost).sum::<f64>();
    SubcontractorCosts {
        maintenance,
        other,
        total,
    }
}

pub fn direct_costs(
    labor: LaborCosts,
    materials: MaterialsCosts,
    subcontractors: SubcontractorCosts,
) -> DirectCosts {
    let total = labor.total + materials.total + subcontractors.total;
    DirectCosts {
        labor,
        materials,
        subcontractors,
        total,
    }
}

/// Overhead applies to the direct-labor base only, then splits into the
/// four fixed-share buckets. The buckets are a breakdown of the overhead
/// amount, not additional cost.
pub fn indirect_costs(labor_total: f64, financials: &ResolvedFinancials) -> IndirectCosts {
    let overhead_amount = labor_total * financials.overhead_rate;
    IndirectCosts {
        overhead_rate: financials.overhead_rate,
        overhead_amount,
        administrative: overhead_amount * OVERHEAD_ADMINISTRATIVE_SHARE,
        facilities: overhead_amount * OVERHEAD_FACILITIES_SHARE,
        operations: overhead_amount * OVERHEAD_OPERATIONS_SHARE,
        marketing: overhead_amount * OVERHEAD_MARKETING_SHARE,
    }
}
