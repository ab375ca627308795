//! Insights for Medical Literature.
//!
//! Corpora hold enriched medical documents; the search, typeahead and concept
//! operations query them.
//!
//! ## Query list encoding
//!
//! Concept filters (`cuis`, `preferred_names`, `surface_forms`, `attributes`)
//! and the `cuis` filter of `getSearchMatches` are sent comma-joined. Every
//! other list-valued query parameter repeats its key.

mod relationship;

pub use relationship::Relationship;

use clinical_define::prelude::*;

/// Snake-case service name.
pub const DEFAULT_SERVICE_NAME: &str = "insights_for_medical_literature";

/// Service URL used when none is configured.
pub const DEFAULT_SERVICE_URL: &str =
    "https://insights-for-medical-literature-service.cloud.ibm.com/services/medical_insights/api";

const JSON: Option<&str> = Some(media::APPLICATION_JSON);

/// The Insights for Medical Literature service.
pub static INSIGHTS_FOR_MEDICAL_LITERATURE: ServiceSpec = ServiceSpec {
    name: DEFAULT_SERVICE_NAME,
    display_name: "Insights for Medical Literature",
    api_version: "v1",
    default_url: DEFAULT_SERVICE_URL,
    operations: OPERATIONS,
};

const OPERATIONS: &[OperationSpec] = &[
    // Corpora
    OperationSpec {
        id: "getCorpora",
        method: RestMethod::Get,
        path: "/v1/corpora",
        description: "Retrieves the available corpus names and configuration",
        params: &[ParameterSpec::query("verbose", "verbose")],
        accept: JSON,
        content_type: None,
    },
    OperationSpec {
        id: "deleteCorpusSchema",
        method: RestMethod::Delete,
        path: "/v1/corpora",
        description: "Delete a corpus",
        params: &[ParameterSpec::query("instance", "instance").required()],
        accept: JSON,
        content_type: None,
    },
    OperationSpec {
        id: "createCorpusSchema",
        method: RestMethod::Put,
        path: "/v1/corpora",
        description: "Define the schema of a new corpus",
        params: &[
            ParameterSpec::body_field("enrichmentTargets", "enrichmentTargets"),
            ParameterSpec::body_field("metadataFields", "metadataFields"),
            ParameterSpec::body_field("corpusName", "corpusName"),
            ParameterSpec::body_field("references", "references"),
        ],
        accept: JSON,
        content_type: JSON,
    },
    OperationSpec {
        id: "setCorpusSchema",
        method: RestMethod::Post,
        path: "/v1/corpora",
        description: "Update the schema of an existing corpus",
        params: &[
            ParameterSpec::body_field("enrichmentTargets", "enrichmentTargets"),
            ParameterSpec::body_field("metadataFields", "metadataFields"),
            ParameterSpec::body_field("corpusName", "corpusName"),
            ParameterSpec::body_field("references", "references"),
        ],
        accept: JSON,
        content_type: JSON,
    },
    OperationSpec {
        id: "setCorpusConfig",
        method: RestMethod::Post,
        path: "/v1/corpora/configure",
        description: "Define connectivity for the document store of a corpus",
        params: &[
            ParameterSpec::body_field("userName", "userName"),
            ParameterSpec::body_field("password", "password"),
            ParameterSpec::body_field("corpusUri", "corpusURI"),
        ],
        accept: JSON,
        content_type: JSON,
    },
    OperationSpec {
        id: "monitorCorpus",
        method: RestMethod::Put,
        path: "/v1/corpora/monitor",
        description: "Enable monitoring of corpus changes",
        params: &[ParameterSpec::query("apikey", "apikey").required()],
        accept: JSON,
        content_type: None,
    },
    OperationSpec {
        id: "enableCorpusSearchTracking",
        method: RestMethod::Put,
        path: "/v1/corpora/tracking",
        description: "Toggle search activity tracking",
        params: &[ParameterSpec::query("enableTracking", "enable_tracking")],
        accept: JSON,
        content_type: None,
    },
    OperationSpec {
        id: "getCorpusConfig",
        method: RestMethod::Get,
        path: "/v1/corpora/{corpus}",
        description: "Retrieves the configuration of a corpus",
        params: &[
            ParameterSpec::path("corpus", "corpus"),
            ParameterSpec::query("verbose", "verbose"),
        ],
        accept: JSON,
        content_type: None,
    },
    // Documents
    OperationSpec {
        id: "getDocuments",
        method: RestMethod::Get,
        path: "/v1/corpora/{corpus}/documents",
        description: "Retrieves information about the documents in a corpus",
        params: &[ParameterSpec::path("corpus", "corpus")],
        accept: JSON,
        content_type: None,
    },
    OperationSpec {
        id: "addCorpusDocument",
        method: RestMethod::Post,
        path: "/v1/corpora/{corpus}/documents",
        description: "Annotates a document and adds it to a corpus",
        params: &[
            ParameterSpec::path("corpus", "corpus"),
            ParameterSpec::body_field("document", "document"),
            ParameterSpec::body_field("acdUrl", "acdUrl"),
            ParameterSpec::body_field("apiKey", "apiKey"),
            ParameterSpec::body_field("flowId", "flowId"),
            ParameterSpec::body_field("accessToken", "accessToken"),
            ParameterSpec::body_field("otherAnnotators", "otherAnnotators"),
        ],
        accept: JSON,
        content_type: JSON,
    },
    OperationSpec {
        id: "getDocumentInfo",
        method: RestMethod::Get,
        path: "/v1/corpora/{corpus}/documents/{document_id}",
        description: "Retrieves the metadata of a document",
        params: &[
            ParameterSpec::path("corpus", "corpus"),
            ParameterSpec::path("documentId", "document_id"),
            ParameterSpec::query("verbose", "verbose"),
        ],
        accept: JSON,
        content_type: None,
    },
    OperationSpec {
        id: "getDocumentCategories",
        method: RestMethod::Get,
        path: "/v1/corpora/{corpus}/documents/{document_id}/categories",
        description: "Categorizes the concepts of a document",
        params: &[
            ParameterSpec::path("corpus", "corpus"),
            ParameterSpec::path("documentId", "document_id"),
            ParameterSpec::query("highlightTagBegin", "highlight_tag_begin"),
            ParameterSpec::query("highlightTagEnd", "highlight_tag_end"),
            ParameterSpec::query("types", "types"),
            ParameterSpec::query("category", "category"),
            ParameterSpec::query("onlyNegatedConcepts", "only_negated_concepts"),
            ParameterSpec::query("fields", "fields"),
            ParameterSpec::query("limit", "limit"),
        ],
        accept: JSON,
        content_type: None,
    },
    OperationSpec {
        id: "getDocumentMultipleCategories",
        method: RestMethod::Post,
        path: "/v1/corpora/{corpus}/documents/{document_id}/categories",
        description: "Categorizes the concepts of a document for several categories",
        params: &[
            ParameterSpec::path("corpus", "corpus"),
            ParameterSpec::path("documentId", "document_id"),
            ParameterSpec::body_field("modelLicense", "modelLicense"),
            ParameterSpec::body_field("highlightedTitle", "highlightedTitle"),
            ParameterSpec::body_field("highlightedAbstract", "highlightedAbstract"),
            ParameterSpec::body_field("highlightedBody", "highlightedBody"),
            ParameterSpec::body_field("highlightedSections", "highlightedSections"),
            ParameterSpec::body_field("passages", "passages"),
            ParameterSpec::body_field("annotations", "annotations"),
            ParameterSpec::query("highlightTagBegin", "highlight_tag_begin"),
            ParameterSpec::query("highlightTagEnd", "highlight_tag_end"),
            ParameterSpec::query("fields", "fields"),
            ParameterSpec::query("limit", "limit"),
        ],
        accept: JSON,
        content_type: JSON,
    },
    OperationSpec {
        id: "getSearchMatches",
        method: RestMethod::Get,
        path: "/v1/corpora/{corpus}/documents/{document_id}/search_matches",
        description: "Finds the search matches inside a document",
        params: &[
            ParameterSpec::path("corpus", "corpus"),
            ParameterSpec::path("documentId", "document_id"),
            ParameterSpec::query("minScore", "min_score").required(),
            ParameterSpec::query("cuis", "cuis").csv(),
            ParameterSpec::query("text", "text"),
            ParameterSpec::query("types", "types"),
            ParameterSpec::query("attributes", "attributes"),
            ParameterSpec::query("values", "values"),
            ParameterSpec::query("nlpAffixes", "nlp_affixes"),
            ParameterSpec::query("limit", "limit"),
            ParameterSpec::query("searchTagBegin", "search_tag_begin"),
            ParameterSpec::query("searchTagEnd", "search_tag_end"),
            ParameterSpec::query("relatedTagBegin", "related_tag_begin"),
            ParameterSpec::query("relatedTagEnd", "related_tag_end"),
            ParameterSpec::query("fields", "fields"),
        ],
        accept: JSON,
        content_type: None,
    },
    // Search
    OperationSpec {
        id: "getFields",
        method: RestMethod::Get,
        path: "/v1/corpora/{corpus}/search/metadata",
        description: "Retrieves the searchable metadata fields of a corpus",
        params: &[ParameterSpec::path("corpus", "corpus")],
        accept: JSON,
        content_type: None,
    },
    OperationSpec {
        id: "search",
        method: RestMethod::Post,
        path: "/v1/corpora/{corpus}/search",
        description: "Runs a JSON query document against a corpus",
        params: &[
            ParameterSpec::path("corpus", "corpus"),
            ParameterSpec::body("body").verbatim(),
            ParameterSpec::query("verbose", "verbose"),
        ],
        accept: JSON,
        content_type: JSON,
    },
    OperationSpec {
        id: "typeahead",
        method: RestMethod::Get,
        path: "/v1/corpora/{corpus}/search/typeahead",
        description: "Suggests concepts for a partial query",
        params: &[
            ParameterSpec::path("corpus", "corpus"),
            ParameterSpec::query("query", "query").required(),
            ParameterSpec::query("ontologies", "ontologies"),
            ParameterSpec::query("types", "types"),
            ParameterSpec::query("category", "category"),
            ParameterSpec::query("verbose", "verbose"),
            ParameterSpec::query("limit", "limit"),
            ParameterSpec::query("maxHitCount", "max_hit_count"),
            ParameterSpec::query("noDuplicates", "no_duplicates"),
        ],
        accept: JSON,
        content_type: None,
    },
    // Concepts
    OperationSpec {
        id: "getConcepts",
        method: RestMethod::Get,
        path: "/v1/corpora/{corpus}/concepts",
        description: "Retrieves concepts of a corpus matching the filters",
        params: &[
            ParameterSpec::path("corpus", "corpus"),
            ParameterSpec::query("cuis", "cuis").csv(),
            ParameterSpec::query("preferredNames", "preferred_names").csv(),
            ParameterSpec::query("surfaceForms", "surface_forms").csv(),
            ParameterSpec::query("attributes", "attributes").csv(),
            ParameterSpec::query("verbose", "verbose"),
            ParameterSpec::query("sort", "sort"),
            ParameterSpec::query("limit", "limit"),
        ],
        accept: JSON,
        content_type: None,
    },
    OperationSpec {
        id: "addArtifact",
        method: RestMethod::Post,
        path: "/v1/corpora/{corpus}/concepts/definitions",
        description: "Adds a dictionary or attribute artifact to a corpus",
        params: &[
            ParameterSpec::path("corpus", "corpus"),
            ParameterSpec::body_field("dictionaryEntry", "dictonaryEntry"),
            ParameterSpec::body_field("attributeEntry", "attributeEntry"),
        ],
        accept: JSON,
        content_type: JSON,
    },
    OperationSpec {
        id: "getCuiInfo",
        method: RestMethod::Get,
        path: "/v1/corpora/{corpus}/concepts/{name_or_id}",
        description: "Retrieves information about a concept",
        params: &[
            ParameterSpec::path("corpus", "corpus"),
            ParameterSpec::path("nameOrId", "name_or_id"),
            ParameterSpec::query("ontology", "ontology"),
            ParameterSpec::query("fields", "fields"),
            ParameterSpec::query("treeLayout", "tree_layout"),
        ],
        accept: JSON,
        content_type: None,
    },
    OperationSpec {
        id: "getHitCount",
        method: RestMethod::Get,
        path: "/v1/corpora/{corpus}/concepts/{name_or_id}/hit_count",
        description: "Counts the documents mentioning a concept",
        params: &[
            ParameterSpec::path("corpus", "corpus"),
            ParameterSpec::path("nameOrId", "name_or_id"),
            ParameterSpec::query("ontology", "ontology"),
        ],
        accept: JSON,
        content_type: None,
    },
    OperationSpec {
        id: "getRelatedConcepts",
        method: RestMethod::Get,
        path: "/v1/corpora/{corpus}/concepts/{name_or_id}/related_concepts",
        description: "Retrieves concepts related to a concept",
        params: &[
            ParameterSpec::path("corpus", "corpus"),
            ParameterSpec::path("nameOrId", "name_or_id"),
            ParameterSpec::query("relationship", "relationship").required(),
            ParameterSpec::query("ontology", "ontology"),
            ParameterSpec::query("relationshipAttributes", "relationship_attributes"),
            ParameterSpec::query("sources", "sources"),
            ParameterSpec::query("recursive", "recursive"),
            ParameterSpec::query("treeLayout", "tree_layout"),
            ParameterSpec::query("maxDepth", "max_depth"),
        ],
        accept: JSON,
        content_type: None,
    },
    OperationSpec {
        id: "getSimilarConcepts",
        method: RestMethod::Get,
        path: "/v1/corpora/{corpus}/concepts/{name_or_id}/similar_concepts",
        description: "Retrieves concepts similar to a concept",
        params: &[
            ParameterSpec::path("corpus", "corpus"),
            ParameterSpec::path("nameOrId", "name_or_id"),
            ParameterSpec::query("returnOntologies", "return_ontologies").required(),
            ParameterSpec::query("ontology", "ontology"),
            ParameterSpec::query("limit", "limit"),
        ],
        accept: JSON,
        content_type: None,
    },
    // Attributes and types
    OperationSpec {
        id: "getAttributes",
        method: RestMethod::Get,
        path: "/v1/corpora/{corpus}/attributes",
        description: "Retrieves the attributes of a corpus",
        params: &[ParameterSpec::path("corpus", "corpus")],
        accept: JSON,
        content_type: None,
    },
    OperationSpec {
        id: "getTypes",
        method: RestMethod::Get,
        path: "/v1/corpora/{corpus}/types",
        description: "Retrieves the semantic types of a corpus",
        params: &[ParameterSpec::path("corpus", "corpus")],
        accept: JSON,
        content_type: None,
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
