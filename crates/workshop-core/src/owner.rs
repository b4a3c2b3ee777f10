use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Business owner record
//
// Keyed in the store by the owner's verbatim display name (not slugified).
// `products_covered` is derived: the catalog import fully recomputes it from
// the current product set, so hand edits to it do not survive an import.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnerRecord {
    pub owner_name: String,
    pub products_covered: Vec<String>,
    pub part1_context_business_process: Part1ContextBusinessProcess,
    pub part2_product_portfolio_review: Part2ProductPortfolioReview,
    pub part3_cross_product_process: Part3CrossProductProcess,
    pub part4_partner_delivery: Part4PartnerDelivery,
    pub part5_ideal_future_state: Part5IdealFutureState,
    pub part6_wrapup: Part6Wrapup,
}

impl OwnerRecord {
    pub fn template() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Part1ContextBusinessProcess {
    pub context_role: String,
    pub context_stages: String,
    pub context_decisions: String,
    pub context_deliverables: String,
    pub context_workflow: String,
    pub context_steps: String,
    pub context_info_needed: String,
    pub context_decision_points: String,
    pub context_partner_impact: String,
    pub context_partner_confidence: String,
    pub context_partner_frustration: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Part2ProductPortfolioReview {
    pub section_a_business_owner: PortfolioSectionA,
    pub section_b_users: PortfolioSectionB,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioSectionA {
    pub product_purpose: String,
    pub product_why_created: String,
    pub product_what_achieve: String,
    pub product_impact_works_well: String,
    pub product_impact_doesnt_work: String,
    pub product_time_impact: String,
    pub product_quality_decisions: String,
    pub product_partner_confidence: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioSectionB {
    pub b1_use_overview: UseOverview,
    pub b2_pain_points_gaps: PainPointsGaps,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UseOverview {
    pub use_purpose: String,
    pub use_frequency: String,
    pub use_who_else: String,
    pub use_workflow_stage: String,
    pub use_critical_path: String,
    pub use_decisions: String,
    pub use_decision_explanation: String,
    pub use_critical_decisions: String,
    pub use_confidence_outputs: String,
    pub use_decisions_without_product: String,
    pub use_why_not_direct: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PainPointsGaps {
    pub pain_frustrations: String,
    pub pain_slowdowns: String,
    pub pain_extra_work: String,
    pub pain_rework_errors: String,
    pub pain_unsupported_needs: String,
    pub pain_content_quality: String,
    pub pain_timeline: String,
    pub pain_usability: String,
    pub pain_missing_info: String,
    pub pain_missing_decisions: String,
    pub pain_manual_work: String,
    pub pain_workarounds: String,
    pub pain_time_added: String,
    pub pain_why_necessary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Part3CrossProductProcess {
    pub section_a_integration: IntegrationFlow,
    pub section_b_bottlenecks: ProcessBottlenecks,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationFlow {
    pub integration_products_work_together: String,
    pub integration_manual_data_movement: String,
    pub integration_gaps: String,
    pub integration_combine_info: String,
    pub integration_how_combine: String,
    pub integration_time_to_combine: String,
    pub integration_error_prone: String,
    pub integration_outside_products: String,
    pub integration_outside_fit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessBottlenecks {
    pub bottleneck_where_slows: String,
    pub bottleneck_waiting_info: String,
    pub bottleneck_manual_steps: String,
    pub bottleneck_rework: String,
    pub bottleneck_handoffs: String,
    pub bottleneck_takes_longer: String,
    pub bottleneck_why_long: String,
    pub bottleneck_faster_look_like: String,
    pub bottleneck_partner_delays: String,
    pub bottleneck_partner_waiting: String,
    pub bottleneck_partner_frustrations: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Part4PartnerDelivery {
    pub section_a_info_needs: PartnerInfoNeeds,
    pub section_b_confidence_trust: PartnerConfidenceTrust,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartnerInfoNeeds {
    pub partner_info_needs: String,
    pub partner_info_frequency: String,
    pub partner_info_format: String,
    pub partner_delivery_method: String,
    pub partner_delivery_time: String,
    pub partner_delivery_automated: String,
    pub partner_value_cant_provide: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartnerConfidenceTrust {
    pub partner_confidence_builders: String,
    pub partner_concerns: String,
    pub partner_demonstrate_data_led: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Part5IdealFutureState {
    pub section_a_prioritization: Prioritization,
    pub section_b_vision: Vision,
    pub section_c_capabilities: Capabilities,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prioritization {
    pub priority_biggest_impact: String,
    pub priority_why: String,
    pub priority_impact_detail: String,
    pub priority_frequency: String,
    pub priority_prevents_faster: String,
    pub priority_partner_difference: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vision {
    pub vision_day_to_day: String,
    pub vision_can_do_new: String,
    pub vision_decisions_faster: String,
    pub vision_partner_delivery_changed: String,
    pub vision_information_access: String,
    pub vision_questions_answer: String,
    pub vision_answer_speed: String,
    pub vision_information_confidence: String,
    pub vision_workflow_changed: String,
    pub vision_manual_steps_gone: String,
    pub vision_whats_faster: String,
    pub vision_whats_easier: String,
    pub vision_whats_reliable: String,
    pub vision_partner_experience_faster: String,
    pub vision_partner_confidence: String,
    pub vision_partner_access: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    pub capability_requirements: String,
    pub capability_fast_enough: String,
    pub capability_quality_requirements: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Part6Wrapup {
    pub summary_validation: String,
    pub summary_missed: String,
    pub summary_most_important: String,
    pub summary_critical_not_discussed: String,
    pub summary_ensure_understanding: String,
}
