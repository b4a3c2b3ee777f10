use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Product record
//
// The `Default` impl doubles as the template generator: it produces a record
// with every leaf field present (strings empty, maturity scores at 3, lists
// empty). There is no separate schema description; this IS the schema.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductRecord {
    pub product_id: String,
    pub product_name: String,
    pub workstream: String,
    pub business_owner: String,
    pub existing_users: String,
    pub primary_operator: String,
    pub primary_developer: String,
    pub technical_session: TechnicalSession,
}

impl ProductRecord {
    /// A fully-populated empty record, used to seed new products so that
    /// later partial saves always merge into a complete tree.
    pub fn template() -> Self {
        Self::default()
    }
}

// ---------------------------------------------------------------------------
// Technical session (operator/developer questionnaire, seven parts)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalSession {
    pub part1_overview: Part1Overview,
    pub part2_technical_stack: Part2TechnicalStack,
    pub part3_development_deployment: Part3DevelopmentDeployment,
    pub part4_challenges: Part4Challenges,
    pub part5_operation_deepdive: Part5OperationDeepdive,
    pub part6_data_integration: Part6DataIntegration,
    pub part7_wrapup: Part7Wrapup,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Part1Overview {
    pub overview_product_desc: String,
    pub overview_problem_solved: String,
    pub overview_process_fit: String,
    pub overview_history: String,
    pub overview_alignment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Part2TechnicalStack {
    pub tech_languages_versions: String,
    pub tech_frameworks_libs: String,
    pub tech_commercial_tools: String,
    pub tech_dependencies_external: String,
    pub tech_dependencies_internal: String,
    pub tech_runtime_env: String,
    pub tech_os_requirements: String,
    pub tech_hardware_needs: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Part3DevelopmentDeployment {
    pub dev_feature_request: String,
    pub dev_roadmap: String,
    pub dev_version_control: String,
    pub dev_code_reviews: String,
    pub dev_testing: String,
    pub dev_docs: String,
    pub dev_deploy_process: String,
    pub dev_deploy_roles: String,
    pub dev_deploy_duration: String,
    pub dev_operator_coordination: String,
    pub dev_operator_comms: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Part4Challenges {
    pub challenges_limitations: String,
    pub challenges_rewrite: String,
    pub challenges_tech_debt: String,
    pub challenges_maintainability: String,
    pub challenges_docs_training: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Part5OperationDeepdive {
    pub usage_access: UsageAccess,
    pub pain_points_workarounds: PainPointsWorkarounds,
    pub gap_analysis: GapAnalysis,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageAccess {
    pub usage_frequency: String,
    pub usage_tasks: String,
    pub usage_duration: String,
    pub access_method: String,
    pub access_permissions: String,
    pub access_locations: String,
    pub training_type: String,
    pub training_duration: String,
    pub training_docs: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PainPointsWorkarounds {
    pub ops_pain_points: String,
    pub ops_slowdowns: String,
    pub ops_workarounds: String,
    pub ops_failure_detection: String,
    pub ops_self_debug: String,
    pub ops_support_contact: String,
    pub ops_resolution_time: String,
    pub ops_missing_features: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GapAnalysis {
    pub gap_output_quality: String,
    pub gap_timeline_speed: String,
    pub gap_unavailability: String,
    pub gap_alternatives: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Part6DataIntegration {
    pub data_inputs: DataInputs,
    pub data_outputs: DataOutputs,
    pub data_storage: DataStorage,
    pub integration_points: IntegrationPoints,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataInputs {
    pub data_inputs_sources: String,
    pub data_inputs_format: String,
    pub data_inputs_frequency: String,
    pub data_inputs_ingestion: String,
    pub data_inputs_time: String,
    pub data_inputs_prep: String,
    pub data_inputs_failure: String,
    pub data_inputs_volume: String,
    pub data_inputs_growth: String,
    pub data_inputs_retention: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataOutputs {
    pub data_outputs_types: String,
    pub data_outputs_destinations: String,
    pub data_outputs_format: String,
    pub data_outputs_export: String,
    pub data_outputs_post: String,
    pub data_outputs_retention: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataStorage {
    pub data_storage_locations: String,
    pub data_storage_access: String,
    pub data_storage_backup: String,
    pub data_storage_recovery: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationPoints {
    pub integrations_internal: String,
    pub integrations_external: String,
    pub integrations_desired: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Part7Wrapup {
    pub maturity_scores: MaturityScores,
    pub prioritization_improvement: String,
    pub critical_unknowns: String,
    pub platform_fit: String,
    pub summary_validation: String,
    pub quotes: Vec<Quote>,
}

/// Integer 1–5 self-assessments; 3 is the neutral starting point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaturityScores {
    pub maturity_development: u8,
    pub maturity_operational: u8,
    pub maturity_data: u8,
    pub maturity_integration: u8,
    pub maturity_documentation: u8,
}

impl Default for MaturityScores {
    fn default() -> Self {
        Self {
            maturity_development: 3,
            maturity_operational: 3,
            maturity_data: 3,
            maturity_integration: 3,
            maturity_documentation: 3,
        }
    }
}

/// A verbatim quote captured during the wrap-up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
    pub speaker: String,
    pub timestamp: String,
    pub quote: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_has_all_parts_populated() {
        let value = serde_json::to_value(ProductRecord::template()).unwrap();
        let session = &value["technical_session"];
        for part in [
            "part1_overview",
            "part2_technical_stack",
            "part3_development_deployment",
            "part4_challenges",
            "part5_operation_deepdive",
            "part6_data_integration",
            "part7_wrapup",
        ] {
            assert!(session[part].is_object(), "missing {part}");
        }
        assert_eq!(session["part1_overview"]["overview_history"], "");
        assert_eq!(
            session["part7_wrapup"]["maturity_scores"]["maturity_development"],
            3
        );
        assert_eq!(
            session["part7_wrapup"]["quotes"],
            serde_json::Value::Array(vec![])
        );
    }

    #[test]
    fn legacy_record_without_session_deserializes() {
        let record: ProductRecord = serde_json::from_str(
            r#"{"product_id": "acme-tool", "product_name": "Acme Tool"}"#,
        )
        .unwrap();
        assert_eq!(record.product_id, "acme-tool");
        assert_eq!(
            record.technical_session.part7_wrapup.maturity_scores,
            MaturityScores::default()
        );
    }

    #[test]
    fn unknown_fields_are_ignored() {
        // Legacy stores may still carry keys the schema has since dropped.
        let record: ProductRecord = serde_json::from_str(
            r#"{"product_name": "Acme", "simple_edit": {"date": ""}}"#,
        )
        .unwrap();
        assert_eq!(record.product_name, "Acme");
    }
}
