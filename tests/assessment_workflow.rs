use mefa_engine::assessment::report::{performance_report, validation_report};
use mefa_engine::assessment::{
    assess_performance, briefing, detect_synergies, optimize_resources, score_compliance,
    validate, ComplianceLevel, ProgramWindow, ProjectRecord, SmartObjectives,
};

fn green_agenda_draft() -> ProjectRecord {
    ProjectRecord {
        title: "District Heating Decarbonisation".to_string(),
        municipality: "Tirana".to_string(),
        country: "Albania".to_string(),
        ipa_window: Some(ProgramWindow::GreenAgenda),
        description: "Retrofit renewable energy systems across the district heating network, \
                      cut carbon emission levels and air pollution, and anchor the investment \
                      in the national strategy for climate action. The works cover boiler \
                      replacement, pipe insulation and digital metering so the utility can \
                      verify savings against a public baseline."
            .to_string(),
        objectives: "Lower greenhouse gas emissions from municipal heating, improve energy \
                     efficiency in public buildings, and build a sustainable operating model \
                     for the utility with transparent environmental reporting to citizens and \
                     the green transition steering group."
            .to_string(),
        methodology: "Work proceeds in three phases: audits and procurement, installation and \
                      commissioning, then monitored operation with staff training. Each phase \
                      closes with an acceptance review by the supervision engineer before the \
                      next tranche of works is released."
            .to_string(),
        risks: "Technical risks around heat-network pressure testing, financial risks from \
                energy price movements, and organizational risks in utility staffing are \
                tracked in a register with named owners and quarterly review by the project \
                board."
            .to_string(),
        sustainability: "Financial sustainability rests on metered savings, institutional \
                         continuity sits with the utility's maintenance unit, and \
                         environmental gains are audited annually against the baseline so the \
                         benefits persist beyond the funding period."
            .to_string(),
        smart_objectives: SmartObjectives {
            specific: "Replace twelve gas boilers with heat pumps across the central district \
                       heating loop during the first two heating seasons."
                .to_string(),
            measurable: "Cut metered CO2 emissions by 900 tonnes per year, verified through \
                         the utility's monitoring platform and an external audit."
                .to_string(),
            achievable: "The utility has completed two smaller retrofit lots and holds \
                         framework contracts with qualified mechanical contractors."
                .to_string(),
            relevant: "Delivers on the Green Agenda pillar of the national energy and climate \
                       plan adopted by the council in 2024."
                .to_string(),
            time_bound: "All installations are commissioned by month 20 and monitored \
                         operation runs through the final evaluation in month 30."
                .to_string(),
        },
        budget: Some(2_400_000.0),
        duration_months: Some(30),
        eu_contribution: Some(1_800_000.0),
        partner_contribution: Some(600_000.0),
        lead_partner: Some("Municipality of Tirana".to_string()),
        partners: Some("Tirana District Heating Utility".to_string()),
        partner_experience: Some("Two completed retrofit lots since 2023".to_string()),
        partner_roles: Some("Municipality leads; utility operates and maintains".to_string()),
        activities: Some("Audits, procurement, installation, commissioning, training".to_string()),
        deliverables: Some("Installed heat pumps, metering dashboard, O&M manuals".to_string()),
        timeline: Some("30 months in three phases with acceptance gates".to_string()),
        milestones: Some("M8 procurement; M20 commissioning; M28 final audit".to_string()),
        phases: Some("Preparation, installation, monitored operation".to_string()),
        indicators: Some("CO2 avoided (t/yr), heat losses (%), cost savings (EUR)".to_string()),
        monitoring_plan: Some("Quarterly reports to the steering group".to_string()),
        evaluation_approach: Some("Independent mid-term and final evaluations".to_string()),
        mitigation: Some("Register reviewed quarterly by the project board".to_string()),
        budget_breakdown: Some("Per-lot cost plan annexed to the application".to_string()),
        technical_specifications: Some("Heat pump and metering specs per EN standards".to_string()),
        feasibility_study: Some("2024 district heating feasibility study".to_string()),
        preparatory_work: Some("Network survey and connection pre-approvals done".to_string()),
    }
}

#[test]
fn end_to_end_assessment_of_a_strong_draft() {
    let draft = green_agenda_draft();

    let compliance = score_compliance(&draft);
    assert_eq!(compliance.window_id, "window3");
    assert!(compliance.total_score >= compliance.window_threshold);
    assert!(compliance.meets_window_threshold);

    let assessment = assess_performance(&draft);
    assert!(assessment.compliance.relevance_aligned);
    assert!(assessment.compliance.maturity_ready);
    // Direct climate keywords put the draft well past the 18% target.
    assert!(assessment.climate_contribution_percent >= 50);

    let validation = validate(&draft);
    assert!(validation.is_valid);
    assert!(matches!(
        validation.compliance_level,
        ComplianceLevel::Compliant | ComplianceLevel::Excellent
    ));

    let optimization = optimize_resources(&draft, &draft.municipality);
    assert_eq!(
        optimization.budget.breakdown.total(),
        optimization.budget.recommended_total
    );
    let rates = optimization.budget.co_financing;
    assert_eq!(
        rates.eu_contribution as u32
            + rates.national_contribution as u32
            + rates.municipal_contribution as u32,
        100
    );

    let local = briefing(&draft.municipality, &draft);
    assert!(local.profile_found);
    assert!(!local.budget_guidance.is_empty());
}

#[test]
fn undeclared_window_is_inferred_for_scoring_and_resourcing() {
    let mut draft = green_agenda_draft();
    draft.ipa_window = None;

    // Compliance scoring falls back to the Green Agenda profile.
    let compliance = score_compliance(&draft);
    assert_eq!(compliance.window_id, "window3");

    // The synergy classifier infers the same window from the narrative.
    let synergies = detect_synergies(&draft);
    assert_eq!(synergies.primary_window, ProgramWindow::GreenAgenda);

    // Resource planning follows the inferred window's budget envelope.
    let optimization = optimize_resources(&draft, &draft.municipality);
    assert!(optimization.budget.recommended_total >= 500_000.0);
    assert!(optimization.budget.recommended_total <= 12_000_000.0);
}

#[test]
fn reports_render_for_failing_and_passing_drafts() {
    let failing = validate(&ProjectRecord::default());
    let text = validation_report(&failing, &ProjectRecord::default());
    assert!(text.contains("IPA III COMPLIANCE VALIDATION REPORT"));
    assert!(text.contains("COMPLIANCE STATUS: NON-COMPLIANT"));
    assert!(text.contains("VALIDATION RESULT: FAIL"));
    assert!(text.contains("Project: Untitled"));

    let draft = green_agenda_draft();
    let passing = validate(&draft);
    let text = validation_report(&passing, &draft);
    assert!(text.contains("VALIDATION RESULT: PASS"));
    assert!(text.contains("IPA Window: window3"));

    let assessment = assess_performance(&draft);
    let text = performance_report(&assessment, &draft);
    assert!(text.contains("IPA III PERFORMANCE ASSESSMENT"));
    assert!(text.contains(&format!(
        "Performance score: {}/100",
        assessment.performance_score
    )));
}
