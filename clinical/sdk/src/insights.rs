//! Insights for Medical Literature client.

use clinical_definitions::INSIGHTS_FOR_MEDICAL_LITERATURE;

use crate::facade::service_facade;

service_facade! {
    /// Client for the Insights for Medical Literature service.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// use clinical_sdk::{CallArguments, InsightsForMedicalLiterature, Relationship};
    ///
    /// let iml = InsightsForMedicalLiterature::builder("2023-03-31").build()?;
    /// let related = iml
    ///     .get_related_concepts(
    ///         CallArguments::new()
    ///             .with("corpus", "medline")
    ///             .with("nameOrId", "C0018787")
    ///             .with("relationship", Relationship::Children.as_str()),
    ///     )
    ///     .await?;
    /// ```
    pub struct InsightsForMedicalLiterature => INSIGHTS_FOR_MEDICAL_LITERATURE;

    // Corpora
    get_corpora => "getCorpora";
    /// Requires `instance`.
    delete_corpus_schema => "deleteCorpusSchema";
    create_corpus_schema => "createCorpusSchema";
    set_corpus_schema => "setCorpusSchema";
    set_corpus_config => "setCorpusConfig";
    monitor_corpus => "monitorCorpus";
    enable_corpus_search_tracking => "enableCorpusSearchTracking";
    get_corpus_config => "getCorpusConfig";

    // Documents
    get_documents => "getDocuments";
    add_corpus_document => "addCorpusDocument";
    get_document_info => "getDocumentInfo";
    get_document_categories => "getDocumentCategories";
    get_document_multiple_categories => "getDocumentMultipleCategories";
    /// Requires `corpus`, `documentId` and `minScore`. `cuis` is sent comma-joined.
    get_search_matches => "getSearchMatches";

    // Search
    get_fields => "getFields";
    /// Runs a query document. `body` may be a JSON value or a JSON string,
    /// which is sent unchanged.
    search => "search";
    /// Requires `corpus` and `query`.
    typeahead => "typeahead";

    // Concepts
    /// `cuis`, `preferredNames`, `surfaceForms` and `attributes` are sent
    /// comma-joined.
    get_concepts => "getConcepts";
    add_artifact => "addArtifact";
    get_cui_info => "getCuiInfo";
    get_hit_count => "getHitCount";
    /// Requires `corpus`, `nameOrId` and `relationship`
    /// (see [`Relationship`](crate::Relationship)).
    get_related_concepts => "getRelatedConcepts";
    get_similar_concepts => "getSimilarConcepts";

    // Attributes and types
    get_attributes => "getAttributes";
    get_types => "getTypes";

    // Status
    get_health_check_status => "getHealthCheckStatus";
}
