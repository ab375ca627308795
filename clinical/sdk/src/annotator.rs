//! Annotator for Clinical Data client.

use clinical_definitions::ANNOTATOR_FOR_CLINICAL_DATA;

use crate::facade::service_facade;

service_facade! {
    /// Client for the Annotator for Clinical Data service.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// use clinical_sdk::{AnnotatorForClinicalData, CallArguments};
    ///
    /// let acd = AnnotatorForClinicalData::builder("2023-03-31").build()?;
    /// let profiles = acd.get_profiles(None).await?;
    /// let profile = acd
    ///     .get_profile(CallArguments::new().with("id", "wh_acd.ibm_clinical_insights_v1.0_profile"))
    ///     .await?;
    /// ```
    pub struct AnnotatorForClinicalData => ANNOTATOR_FOR_CLINICAL_DATA;

    // Profiles
    /// Lists profile names.
    get_profiles => "getProfiles";
    /// Creates a profile. Body fields use the `new` prefix (`newId`, `newName`, ...).
    create_profile => "createProfile";
    /// Requires `id`.
    get_profile => "getProfile";
    /// Replaces profile `id`.
    update_profile => "updateProfile";
    delete_profile => "deleteProfile";

    // Flows
    get_flows => "getFlows";
    create_flows => "createFlows";
    get_flows_by_id => "getFlowsById";
    update_flows => "updateFlows";
    delete_flows => "deleteFlows";

    // Analysis
    /// Runs the annotators in `annotatorFlows` over `unstructured` containers.
    run_pipeline => "runPipeline";
    /// Analyzes text with a persisted flow.
    ///
    /// Requires `flowId`, `returnAnalyzedText` and `analyticFlowBeanInput`.
    /// A string input is sent verbatim; set `contentType` to `text/plain` for
    /// raw text.
    run_pipeline_with_flow => "runPipelineWithFlow";

    // Annotators
    get_annotators => "getAnnotators";
    get_annotators_by_id => "getAnnotatorsById";

    // User data
    delete_user_specific_artifacts => "deleteUserSpecificArtifacts";

    // Cartridges
    cartridges_get => "cartridgesGet";
    /// Uploads an `archiveFile` cartridge as `multipart/form-data`.
    cartridges_post_multipart => "cartridgesPostMultipart";
    cartridges_put_multipart => "cartridgesPutMultipart";
    cartridges_get_id => "cartridgesGetId";
    deploy_cartridge => "deployCartridge";

    // Status
    /// Fails with HTTP 500 when the service is unhealthy.
    get_health_check_status => "getHealthCheckStatus";
}
