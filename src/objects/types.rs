use serde::Deserialize;

/// Opaque listing filter.
///
/// The exchange layer does not interpret these fields; they are carried from
/// the query string to the storage collaborator as-is. Matching semantics are
/// the store's concern.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Filter {
    pub added_after: Option<String>,
    #[serde(rename = "match[id]")]
    pub id: Option<String>,
    #[serde(rename = "match[type]")]
    pub object_type: Option<String>,
    #[serde(rename = "match[version]")]
    pub version: Option<String>,
}
