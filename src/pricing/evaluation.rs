//! Evaluation method, contract terms, and pricing-strategy assessment.

use once_cell::sync::Lazy;
use regex::Regex;

use super::defaults::MARKET_AVERAGE_PER_LOAD;
use crate::types::{
    CompetitiveRisk, ContractKind, ContractTerms, Evaluation, EvaluationMethod, FactorWeights,
    PricingStrategy,
};

/// Detect how the government will evaluate offers. Unmatched documents
/// default to best value with a 40/30/30 split.
pub fn detect_evaluation(text: &str) -> Evaluation {
    let lower = text.to_lowercase();

    if lower.contains("lowest price technically acceptable") || lower.contains("lpta") {
        return Evaluation {
            method: EvaluationMethod::Lpta,
            weights: FactorWeights {
                technical: 0,
                past_performance: 0,
                price: 100,
            },
        };
    }

    if lower.contains("price only") || lower.contains("lowest responsive bid") {
        return Evaluation {
            method: EvaluationMethod::PriceOnly,
            weights: FactorWeights {
                technical: 0,
                past_performance: 0,
                price: 100,
            },
        };
    }

    Evaluation {
        method: EvaluationMethod::BestValue,
        weights: FactorWeights {
            technical: 40,
            past_performance: 30,
            price: 30,
        },
    }
}

static PERIOD_MONTHS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)[- ]?month").expect("period months pattern"));
static PERIOD_YEARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)[- ]?year").expect("period years pattern"));

/// Detect the contract vehicle. Unmatched documents default to firm
/// fixed price over 12 months.
pub fn detect_contract(text: &str) -> ContractTerms {
    let lower = text.to_lowercase();

    let kind = if lower.contains("firm fixed price")
        || lower.contains("firm-fixed-price")
        || lower.contains("ffp")
    {
        ContractKind::Ffp
    } else if lower.contains("cost plus") || lower.contains("cost-plus") || lower.contains("cpff") {
        ContractKind::Cpff
    } else if lower.contains("time and materials")
        || lower.contains("time & materials")
        || lower.contains("t&m")
    {
        ContractKind::Tm
    } else if lower.contains("idiq") || lower.contains("indefinite delivery") {
        ContractKind::Other
    } else {
        ContractKind::Ffp
    };

    let period_months = PERIOD_MONTHS
        .captures(text)
        .and_then(|c| c[1].parse::<u32>().ok())
        .or_else(|| {
            PERIOD_YEARS
                .captures(text)
                .and_then(|c| c[1].parse::<u32>().ok())
                .map(|y| y * 12)
        })
        .unwrap_or(12);

    ContractTerms {
        kind,
        period_months,
    }
}

/// Position the computed per-load price against the reference market
/// average and rate the competitive risk.
///
/// Under price-driven evaluation any premium over market raises the risk
/// tier directly. Under best value the price factor carries less weight,
/// so a premium is demoted one tier unless price is still the dominant
/// factor.
pub fn assess_strategy(
    evaluation: &Evaluation,
    total_price: f64,
    monthly_loads: f64,
) -> PricingStrategy {
    let price_per_load = if monthly_loads > 0.0 {
        total_price / monthly_loads
    } else {
        0.0
    };
    let premium = if MARKET_AVERAGE_PER_LOAD > 0.0 {
        (price_per_load - MARKET_AVERAGE_PER_LOAD) / MARKET_AVERAGE_PER_LOAD
    } else {
        0.0
    };

    let price_driven = matches!(
        evaluation.method,
        EvaluationMethod::Lpta | EvaluationMethod::PriceOnly
    ) || evaluation.weights.price >= 50;

    let raw_risk = if premium > 0.30 {
        CompetitiveRisk::High
    } else if premium > 0.15 {
        CompetitiveRisk::Medium
    } else {
        CompetitiveRisk::Low
    };

    let competitive_risk = if price_driven {
        raw_risk
    } else {
        match raw_risk {
            CompetitiveRisk::High => CompetitiveRisk::Medium,
            CompetitiveRisk::Medium | CompetitiveRisk::Low => CompetitiveRisk::Low,
        }
    };

    let mut recommendations = Vec::new();
    if premium <= 0.0 {
        recommendations.push(format!(
            "Price of ${price_per_load:.2} per load is at or below the market average of \
             ${MARKET_AVERAGE_PER_LOAD:.2}; pricing is competitive as proposed"
        ));
    } else {
        recommendations.push(format!(
            "Price of ${price_per_load:.2} per load is {:.0}% above the market average of \
             ${MARKET_AVERAGE_PER_LOAD:.2}",
            premium * 100.0
        ));
        match competitive_risk {
            CompetitiveRisk::High => recommendations.push(
                "Reduce overhead allocation or profit target to close the gap before \
                 submission"
                    .to_string(),
            ),
            CompetitiveRisk::Medium => recommendations.push(
                "Document the service-level justification for the premium in the technical \
                 volume"
                    .to_string(),
            ),
            CompetitiveRisk::Low => {}
        }
    }
    if !price_driven {
        recommendations.push(format!(
            "Evaluation weights price at {}%; emphasize technical and past-performance \
             strengths",
            evaluation.weights.price
        ));
    }

    PricingStrategy {
        price_per_load,
        market_average_per_load: MARKET_AVERAGE_PER_LOAD,
        competitive_risk,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lpta_phrase_sets_price_only_weights() {
        let evaluation = detect_evaluation("Award will be made on a lowest price technically acceptable basis.");
        assert_eq!(evaluation.method, EvaluationMethod::Lpta);
        assert_eq!(evaluation.weights.price, 100);
    }

    #[test]
    fn unmatched_text_defaults_to_best_value_ffp_12_months() {
        let evaluation = detect_evaluation("Provide drayage services.");
        assert_eq!(evaluation.method, EvaluationMethod::BestValue);
        assert_eq!(evaluation.weights.technical, 40);

        let contract = detect_contract("Provide drayage services.");
        assert_eq!(contract.kind, ContractKind::Ffp);
        assert_eq!(contract.period_months, 12);
    }

    #[test]
    fn year_period_converts_to_months() {
        let contract = detect_contract("cost plus fixed fee over a 3-year period");
        assert_eq!(contract.kind, ContractKind::Cpff);
        assert_eq!(contract.period_months, 36);
    }
}
