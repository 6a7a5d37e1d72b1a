//! Volume signal mining and direct-labor buildup.

use once_cell::sync::Lazy;
use regex::Regex;

use super::defaults::{
    ResolvedFinancials, AVERAGE_ROAD_SPEED_MPH, DEFAULT_LOADS_PER_DAY, DEFAULT_MILES_PER_LOAD,
    DRIVERS_PER_DISPATCHER, MONTHLY_HOURS_PER_FTE, OPERATING_DAYS_PER_MONTH, SHIFT_HOURS,
};
use crate::types::{LaborCosts, LaborLine};

/// Service volume mined from the requirement texts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeEstimate {
    pub loads_per_day: f64,
    pub miles_per_load: f64,
}

impl VolumeEstimate {
    pub fn monthly_loads(&self) -> f64 {
        self.loads_per_day * OPERATING_DAYS_PER_MONTH
    }

    pub fn monthly_miles(&self) -> f64 {
        self.monthly_loads() * self.miles_per_load
    }
}

static LOADS_PER_DAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([\d,]+)\s*loads?\s*(?:per|/|a|each)\s*day").expect("loads per day pattern")
});
static LOADS_PER_MONTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([\d,]+)\s*loads?\s*(?:per|/|a|each)\s*month").expect("loads per month pattern")
});
static MILES_PER_LOAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([\d,]+)\s*miles?\s*(?:per|/|a|each)\s*(?:load|trip|haul)")
        .expect("miles per load pattern")
});

fn parse_number(raw: &str) -> Option<f64> {
    raw.replace(',', "").parse().ok()
}

/// Scan the requirement strings for volume and distance figures. The
/// first match wins; documents that state neither get the fixed
/// defaults.
pub fn estimate_volume(requirements: &[String]) -> VolumeEstimate {
    let mut loads_per_day = None;
    let mut miles_per_load = None;

    for text in requirements {
        if loads_per_day.is_none() {
            if let Some(c) = LOADS_PER_DAY.captures(text) {
                loads_per_day = parse_number(&c[1]);
            } else if let Some(c) = LOADS_PER_MONTH.captures(text) {
                loads_per_day = parse_number(&c[1]).map(|m| m / OPERATING_DAYS_PER_MONTH);
            }
        }
        if miles_per_load.is_none() {
            if let Some(c) = MILES_PER_LOAD.captures(text) {
                miles_per_load = parse_number(&c[1]);
            }
        }
        if loads_per_day.is_some() && miles_per_load.is_some() {
            break;
        }
    }

    VolumeEstimate {
        loads_per_day: loads_per_day.unwrap_or(DEFAULT_LOADS_PER_DAY),
        miles_per_load: miles_per_load.unwrap_or(DEFAULT_MILES_PER_LOAD),
    }
}

/// Staffing derivation and monthly direct-labor cost.
///
/// Hours per load come from the assumed average road speed; a driver
/// covers `SHIFT_HOURS / hours_per_load` loads per shift, and headcount
/// is the ceiling of daily volume over that figure. Dispatchers scale at
/// one per twenty drivers and supervision is a single fixed position.
pub fn direct_labor(volume: &VolumeEstimate, financials: &ResolvedFinancials) -> LaborCosts {
    let hours_per_load = volume.miles_per_load / AVERAGE_ROAD_SPEED_MPH;
    let loads_per_driver_shift = SHIFT_HOURS / hours_per_load;
    let drivers = (volume.loads_per_day / loads_per_driver_shift).ceil().max(1.0) as u32;
    let dispatchers = ((drivers as f64 / DRIVERS_PER_DISPATCHER).ceil() as u32).max(1);
    let supervisors = 1u32;

    let burden = 1.0 + financials.fringe_rate;
    let line = |fte: u32, rate: f64| {
        let hours = MONTHLY_HOURS_PER_FTE;
        LaborLine {
            fte,
            hours,
            rate,
            cost: fte as f64 * hours * rate * burden,
        }
    };

    let drivers = line(drivers, financials.driver_wage);
    let dispatchers = line(dispatchers, financials.dispatcher_wage);
    let supervisors = line(supervisors, financials.supervisor_wage);

    let total = drivers.cost + dispatchers.cost + supervisors.cost;
    let base = total / burden;
    let fringe = base * financials.fringe_rate;

    LaborCosts {
        drivers,
        dispatchers,
        supervisors,
        fringe,
        total,
    }
}
