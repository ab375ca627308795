//! Annotator for Clinical Data.
//!
//! Profiles and flows configure which annotators run; cartridges package and
//! deploy them; `runPipeline` / `runPipelineWithFlow` analyze clinical text.
//!
//! ## Operations
//!
//! | Group | Operations |
//! |---|---|
//! | Profiles | `getProfiles`, `createProfile`, `getProfile`, `updateProfile`, `deleteProfile` |
//! | Flows | `getFlows`, `createFlows`, `getFlowsById`, `updateFlows`, `deleteFlows` |
//! | Analyze | `runPipeline`, `runPipelineWithFlow` |
//! | Annotators | `getAnnotators`, `getAnnotatorsById` |
//! | User data | `deleteUserSpecificArtifacts` |
//! | Cartridges | `cartridgesGet`, `cartridgesPostMultipart`, `cartridgesPutMultipart`, `cartridgesGetId`, `deployCartridge` |
//! | Status | `getHealthCheckStatus` |

use clinical_define::prelude::*;

/// Snake-case service name.
pub const DEFAULT_SERVICE_NAME: &str = "annotator_for_clinical_data";

/// Service URL used when none is configured.
pub const DEFAULT_SERVICE_URL: &str =
    "https://annotator-for-clinical-data-acd.cloud.ibm.com/services/clinical_data_annotator/api";

const JSON: Option<&str> = Some(media::APPLICATION_JSON);
const MULTIPART: Option<&str> = Some(media::MULTIPART_FORM_DATA);

/// The Annotator for Clinical Data service.
pub static ANNOTATOR_FOR_CLINICAL_DATA: ServiceSpec = ServiceSpec {
    name: DEFAULT_SERVICE_NAME,
    display_name: "Annotator for Clinical Data",
    api_version: "v1",
    default_url: DEFAULT_SERVICE_URL,
    operations: OPERATIONS,
};

const OPERATIONS: &[OperationSpec] = &[
    // Profiles
    OperationSpec {
        id: "getProfiles",
        method: RestMethod::Get,
        path: "/v1/profiles",
        description: "Get list of available persisted profiles",
        params: &[],
        accept: JSON,
        content_type: None,
    },
    OperationSpec {
        id: "createProfile",
        method: RestMethod::Post,
        path: "/v1/profiles",
        description: "Persist a new profile",
        params: &[
            ParameterSpec::body_field("newId", "id"),
            ParameterSpec::body_field("newName", "name"),
            ParameterSpec::body_field("newDescription", "description"),
            ParameterSpec::body_field("newPublishedDate", "publishedDate"),
            ParameterSpec::body_field("newPublish", "publish"),
            ParameterSpec::body_field("newVersion", "version"),
            ParameterSpec::body_field("newCartridgeId", "cartridgeId"),
            ParameterSpec::body_field("newAnnotators", "annotators"),
        ],
        accept: JSON,
        content_type: JSON,
    },
    OperationSpec {
        id: "getProfile",
        method: RestMethod::Get,
        path: "/v1/profiles/{id}",
        description: "Get details of a specific profile",
        params: &[ParameterSpec::path("id", "id")],
        accept: JSON,
        content_type: None,
    },
    OperationSpec {
        id: "updateProfile",
        method: RestMethod::Put,
        path: "/v1/profiles/{id}",
        description: "Persist a new or update an existing profile",
        params: &[
            ParameterSpec::path("id", "id"),
            ParameterSpec::body_field("newId", "id"),
            ParameterSpec::body_field("newName", "name"),
            ParameterSpec::body_field("newDescription", "description"),
            ParameterSpec::body_field("newPublishedDate", "publishedDate"),
            ParameterSpec::body_field("newPublish", "publish"),
            ParameterSpec::body_field("newVersion", "version"),
            ParameterSpec::body_field("newCartridgeId", "cartridgeId"),
            ParameterSpec::body_field("newAnnotators", "annotators"),
        ],
        accept: JSON,
        content_type: JSON,
    },
    OperationSpec {
        id: "deleteProfile",
        method: RestMethod::Delete,
        path: "/v1/profiles/{id}",
        description: "Delete a persisted profile",
        params: &[ParameterSpec::path("id", "id")],
        accept: JSON,
        content_type: None,
    },
    // Flows
    OperationSpec {
        id: "getFlows",
        method: RestMethod::Get,
        path: "/v1/flows",
        description: "Get list of available persisted flows",
        params: &[],
        accept: JSON,
        content_type: None,
    },
    OperationSpec {
        id: "createFlows",
        method: RestMethod::Post,
        path: "/v1/flows",
        description: "Persist a new flow definition",
        params: &[
            ParameterSpec::body_field("newId", "id"),
            ParameterSpec::body_field("newName", "name"),
            ParameterSpec::body_field("newDescription", "description"),
            ParameterSpec::body_field("newPublishedDate", "publishedDate"),
            ParameterSpec::body_field("newPublish", "publish"),
            ParameterSpec::body_field("newVersion", "version"),
            ParameterSpec::body_field("newCartridgeId", "cartridgeId"),
            ParameterSpec::body_field("newAnnotatorFlows", "annotatorFlows"),
        ],
        accept: JSON,
        content_type: JSON,
    },
    OperationSpec {
        id: "getFlowsById",
        method: RestMethod::Get,
        path: "/v1/flows/{id}",
        description: "Get details of a specific flow",
        params: &[ParameterSpec::path("id", "id")],
        accept: JSON,
        content_type: None,
    },
    OperationSpec {
        id: "updateFlows",
        method: RestMethod::Put,
        path: "/v1/flows/{id}",
        description: "Persist a new or update an existing flow definition",
        params: &[
            ParameterSpec::path("id", "id"),
            ParameterSpec::body_field("newId", "id"),
            ParameterSpec::body_field("newName", "name"),
            ParameterSpec::body_field("newDescription", "description"),
            ParameterSpec::body_field("newPublishedDate", "publishedDate"),
            ParameterSpec::body_field("newPublish", "publish"),
            ParameterSpec::body_field("newVersion", "version"),
            ParameterSpec::body_field("newCartridgeId", "cartridgeId"),
            ParameterSpec::body_field("newAnnotatorFlows", "annotatorFlows"),
        ],
        accept: JSON,
        content_type: JSON,
    },
    OperationSpec {
        id: "deleteFlows",
        method: RestMethod::Delete,
        path: "/v1/flows/{id}",
        description: "Delete a persisted flow",
        params: &[ParameterSpec::path("id", "id")],
        accept: JSON,
        content_type: None,
    },
    // Analyze
    OperationSpec {
        id: "runPipeline",
        method: RestMethod::Post,
        path: "/v1/analyze",
        description: "Detect entities and relations from unstructured data",
        params: &[
            ParameterSpec::body_field("unstructured", "unstructured"),
            ParameterSpec::body_field("annotatorFlows", "annotatorFlows"),
            ParameterSpec::query("debugTextRestore", "debug_text_restore"),
            ParameterSpec::query("returnAnalyzedText", "return_analyzed_text"),
        ],
        accept: JSON,
        content_type: JSON,
    },
    OperationSpec {
        id: "runPipelineWithFlow",
        method: RestMethod::Post,
        path: "/v1/analyze/{flow_id}",
        description: "Analyze text or a container request with a persisted flow",
        params: &[
            ParameterSpec::path("flowId", "flow_id"),
            ParameterSpec::query("returnAnalyzedText", "return_analyzed_text").required(),
            ParameterSpec::body("analyticFlowBeanInput").verbatim(),
            ParameterSpec::header("contentType", "Content-Type"),
            ParameterSpec::query("debugTextRestore", "debug_text_restore"),
        ],
        accept: JSON,
        content_type: JSON,
    },
    // Annotators
    OperationSpec {
        id: "getAnnotators",
        method: RestMethod::Get,
        path: "/v1/annotators",
        description: "Get list of available annotators",
        params: &[],
        accept: JSON,
        content_type: None,
    },
    OperationSpec {
        id: "getAnnotatorsById",
        method: RestMethod::Get,
        path: "/v1/annotators/{id}",
        description: "Get details of a specific annotator",
        params: &[ParameterSpec::path("id", "id")],
        accept: JSON,
        content_type: None,
    },
    // User data
    OperationSpec {
        id: "deleteUserSpecificArtifacts",
        method: RestMethod::Delete,
        path: "/v1/user_data",
        description: "Delete tenant specific artifacts",
        params: &[],
        accept: None,
        content_type: None,
    },
    // Cartridges
    OperationSpec {
        id: "cartridgesGet",
        method: RestMethod::Get,
        path: "/v1/cartridges",
        description: "Get list of deployed cartridges",
        params: &[],
        accept: JSON,
        content_type: None,
    },
    OperationSpec {
        id: "cartridgesPostMultipart",
        method: RestMethod::Post,
        path: "/v1/cartridges",
        description: "Create a cartridge deployment",
        params: &[ParameterSpec::form_field("archiveFile", "archive_file")],
        accept: JSON,
        content_type: MULTIPART,
    },
    OperationSpec {
        id: "cartridgesPutMultipart",
        method: RestMethod::Put,
        path: "/v1/cartridges",
        description: "Update a cartridge deployment",
        params: &[ParameterSpec::form_field("archiveFile", "archive_file")],
        accept: JSON,
        content_type: MULTIPART,
    },
    OperationSpec {
        id: "cartridgesGetId",
        method: RestMethod::Get,
        path: "/v1/cartridges/{id}",
        description: "Get details of a cartridge deployment",
        params: &[ParameterSpec::path("id", "id")],
        accept: JSON,
        content_type: None,
    },
    OperationSpec {
        id: "deployCartridge",
        method: RestMethod::Post,
        path: "/v1/deploy",
        description: "Deploy a cartridge (legacy endpoint)",
        params: &[
            ParameterSpec::form_field("archiveFile", "archive_file"),
            ParameterSpec::query("update", "update"),
        ],
        accept: JSON,
        content_type: MULTIPART,
    },
    // Status
    OperationSpec {
        id: "getHealthCheckStatus",
        method: RestMethod::Get,
        path: "/v1/status/health_check",
        description: "Determine if the service is up and running; 500 when unhealthy",
        params: &[ParameterSpec::query("format", "format")],
        accept: JSON,
        content_type: None,
    },
];
