use rfx_core::pricing::ProposalCalculator;
use rfx_core::types::{
    CompanyFinancials, CompanyType, CompetitiveRisk, ContractKind, EvaluationMethod,
    OrganizationProfile,
};

fn carrier_profile() -> OrganizationProfile {
    OrganizationProfile {
        company_name: "Acme Logistics".to_string(),
        company_type: CompanyType::AssetCarrier,
        dot_number: Some("1234567".to_string()),
        mc_number: Some("MC-123456".to_string()),
        tax_id: None,
        certifications: vec!["SmartWay".to_string()],
        equipment_types: vec!["dump truck".to_string()],
        service_areas: vec!["Anytown County".to_string()],
        fleet_size: Some(25),
        years_in_business: Some(10),
    }
}

fn reqs(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

#[test]
fn ffp_default_scenario_lands_on_twelve_percent_profit() {
    let requirements = reqs(&[
        "Contractor shall handle 1,100 loads per month under a firm fixed price contract.",
        "Average haul is 50 miles per load.",
    ]);

    let model = ProposalCalculator::new()
        .calculate(&requirements, &carrier_profile(), None)
        .expect("valid profile must price");

    assert_eq!(model.contract.kind, ContractKind::Ffp);
    assert_eq!(model.monthly_loads, 1_100.0);
    assert_eq!(model.profit.profit_rate, 0.12, "0.10 target plus the FFP premium");
    assert!(
        model.verification.compliance_checks.iter().all(|c| c.passed),
        "all compliance checks must pass on defaults: {:?}",
        model.verification.compliance_checks
    );
    assert!(model.verification.mathematical_accuracy);
    assert!(model.verification.ready_for_submission);
}

#[test]
fn invariant_cost_buildup_reconciles_to_total_price() {
    let cases: Vec<Vec<String>> = vec![
        reqs(&["Provide general drayage services."]),
        reqs(&["Handle 200 loads per day at 20 miles per load under a cost plus fixed fee contract."]),
        reqs(&["Handle 10 loads per day.", "Lowest price technically acceptable award."]),
    ];

    for requirements in cases {
        let model = ProposalCalculator::new()
            .calculate(&requirements, &carrier_profile(), None)
            .unwrap();

        let rebuilt = model.direct_costs.total
            + model.indirect_costs.overhead_amount
            + model.profit.profit_amount;
        assert!(
            (rebuilt - model.total_price).abs() < 0.01,
            "buildup must reconcile: rebuilt {rebuilt}, stated {}",
            model.total_price
        );
        assert_eq!(
            model.total_cost,
            model.direct_costs.total + model.indirect_costs.overhead_amount
        );
    }
}

#[test]
fn invariant_profit_rate_stays_in_band() {
    let profile = carrier_profile();
    let targets = [0.01, 0.08, 0.10, 0.14, 0.50];

    for target in targets {
        let financials = CompanyFinancials {
            profit_margin_target: Some(target),
            ..CompanyFinancials::default()
        };
        let model = ProposalCalculator::new()
            .calculate(
                &reqs(&["Firm fixed price drayage contract."]),
                &profile,
                Some(&financials),
            )
            .unwrap();
        assert!(
            (0.08..=0.15).contains(&model.profit.profit_rate),
            "rate {} must be clamped for target {target}",
            model.profit.profit_rate
        );
    }
}

#[test]
fn weighted_guidelines_factors_sum_to_the_rate() {
    let model = ProposalCalculator::new()
        .calculate(&reqs(&["Cost plus fixed fee services."]), &carrier_profile(), None)
        .unwrap();

    let f = &model.profit.factors;
    let sum =
        f.contractor_effort + f.cost_risk + f.socioeconomic + f.capital_investment + f.cost_efficiency;
    assert!((sum - model.profit.profit_rate).abs() < 1e-12);
}

#[test]
fn lpta_premium_pricing_raises_competitive_risk() {
    // Tiny volume with fixed monthly costs pushes the per-load price far
    // above the market reference.
    let model = ProposalCalculator::new()
        .calculate(
            &reqs(&[
                "Handle 2 loads per day.",
                "Award will be made to the lowest price technically acceptable offeror.",
            ]),
            &carrier_profile(),
            None,
        )
        .unwrap();

    assert_eq!(model.evaluation.method, EvaluationMethod::Lpta);
    assert_eq!(model.pricing_strategy.competitive_risk, CompetitiveRisk::High);
    assert!(
        model
            .verification
            .warnings
            .iter()
            .any(|w| w.contains("Competitive risk")),
        "high risk must surface as a warning"
    );
    assert!(!model.pricing_strategy.recommendations.is_empty());
}

#[test]
fn schedules_render_the_model_figures() {
    let model = ProposalCalculator::new()
        .calculate(
            &reqs(&["Handle 1,100 loads per month at 50 miles per load."]),
            &carrier_profile(),
            None,
        )
        .unwrap();

    assert!(model.schedules.labor_detail.contains("DIRECT LABOR"));
    assert!(model.schedules.labor_detail.contains("20"), "driver headcount appears");
    assert!(model.schedules.bill_of_materials.contains("Fuel"));
    assert!(model.schedules.indirect_rates.contains("37.8%"));
    assert!(model.schedules.basis_of_estimate.contains("1100 loads per month"));
    assert!(model.schedules.pricing_narrative.contains("per load"));

    let cents = (model.total_price * 100.0).round() as i64;
    let flat = model.schedules.basis_of_estimate.replace(',', "");
    assert!(
        flat.contains(&format!("TOTAL PRICE: ${}.{:02}", cents / 100, (cents % 100).abs())),
        "the bottom line must state the model's total price"
    );
}

#[test]
fn caller_wage_overrides_flow_into_labor_costs() {
    let base = ProposalCalculator::new()
        .calculate(&reqs(&["Drayage services."]), &carrier_profile(), None)
        .unwrap();

    let financials = CompanyFinancials {
        driver_wage: Some(50.0),
        ..CompanyFinancials::default()
    };
    let doubled = ProposalCalculator::new()
        .calculate(&reqs(&["Drayage services."]), &carrier_profile(), Some(&financials))
        .unwrap();

    assert_eq!(doubled.direct_costs.labor.drivers.rate, 50.0);
    assert!(
        doubled.direct_costs.labor.drivers.cost > base.direct_costs.labor.drivers.cost,
        "higher wages must raise driver cost"
    );
}
