//! Independent verification of a completed cost model.

use log::warn;

use super::defaults::{PROFIT_RATE_CEILING, PROFIT_RATE_FLOOR};
use crate::types::{ComplianceCheck, CompetitiveRisk, ProposalCostModel, VerificationReport};

/// Absolute tolerance for the price recomputation.
const MATH_TOLERANCE: f64 = 1e-2;

const OVERHEAD_RATE_MIN: f64 = 0.30;
const OVERHEAD_RATE_MAX: f64 = 0.45;

/// Recompute the total price and run the named compliance checks.
///
/// A failed recomputation should be impossible when the model came from
/// the calculator; the guard exists to catch edit-time regressions and
/// hand-modified models. Failures are surfaced in the report, never
/// raised.
pub fn verify(model: &ProposalCostModel) -> VerificationReport {
    let recomputed =
        model.direct_costs.total + model.indirect_costs.overhead_amount + model.profit.profit_amount;
    let mathematical_accuracy = (recomputed - model.total_price).abs() < MATH_TOLERANCE;

    let mut warnings = Vec::new();
    if !mathematical_accuracy {
        warn!(
            "cost model arithmetic mismatch: recomputed {recomputed:.2}, stated {:.2}",
            model.total_price
        );
        warnings.push(format!(
            "Total price {:.2} does not match recomputed cost buildup {recomputed:.2}",
            model.total_price
        ));
    }

    let compliance_checks = vec![
        ComplianceCheck {
            check: "Direct labor is greater than zero".to_string(),
            passed: model.direct_costs.labor.total > 0.0,
        },
        ComplianceCheck {
            check: "Direct materials are greater than zero".to_string(),
            passed: model.direct_costs.materials.total > 0.0,
        },
        ComplianceCheck {
            check: "Overhead rate is within the 30-45% band".to_string(),
            passed: (OVERHEAD_RATE_MIN..=OVERHEAD_RATE_MAX)
                .contains(&model.indirect_costs.overhead_rate),
        },
        ComplianceCheck {
            check: "Profit rate is within the 8-15% band".to_string(),
            passed: (PROFIT_RATE_FLOOR..=PROFIT_RATE_CEILING).contains(&model.profit.profit_rate),
        },
        ComplianceCheck {
            check: "At least one pricing recommendation exists".to_string(),
            passed: !model.pricing_strategy.recommendations.is_empty(),
        },
    ];

    if model.pricing_strategy.competitive_risk == CompetitiveRisk::High {
        warnings.push(
            "Competitive risk is HIGH; price is well above the market reference".to_string(),
        );
    }
    if model.indirect_costs.overhead_rate > OVERHEAD_RATE_MAX {
        warnings.push(format!(
            "Overhead rate {:.1}% exceeds the typical 45% ceiling",
            model.indirect_costs.overhead_rate * 100.0
        ));
    }

    let ready_for_submission = mathematical_accuracy && compliance_checks.iter().all(|c| c.passed);

    VerificationReport {
        mathematical_accuracy,
        compliance_checks,
        warnings,
        ready_for_submission,
    }
}
