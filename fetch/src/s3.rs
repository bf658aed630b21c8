//! Minimal parsing for S3 `ListObjectsV2` responses.
//!
//! Only the keys the asset listing needs are modelled; anything else in the
//! document is ignored.
use launchpad_types::{ErrorCode, FetchError};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListBucketV2Response {
    pub name: String,
    pub prefix: Option<String>,
    pub delimiter: Option<String>,
    pub max_keys: Option<u32>,
    pub is_truncated: bool,
    /// Absent from the document when the prefix matches nothing.
    #[serde(default)]
    pub contents: Vec<Object>,
    pub common_prefixes: Option<Vec<CommonPrefix>>,
}

impl ListBucketV2Response {
    /// Object keys in document order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.contents.iter().map(|o| o.key.clone()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Object {
    pub key: String,
    pub last_modified: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommonPrefix {
    pub prefix: String,
}

pub fn parse_list_bucket(xml: &str) -> Result<ListBucketV2Response, FetchError> {
    serde_xml_rs::from_str(xml).map_err(|e| {
        FetchError::new(
            ErrorCode::Parse,
            format!("failed to parse list bucket response: {e}"),
        )
    })
}
