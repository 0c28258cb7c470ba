//! API response types
//!
//! List envelope returned by the Table API's collection endpoints.

use serde::{Deserialize, Serialize};

/// Collection list response
///
/// ```json
/// {
///     "data": [ ... ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionResponse<T> {
    /// Matching records; an absent field deserializes as empty
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> CollectionResponse<T> {
    /// Wrap a list of records
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// True when no records came back
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> Default for CollectionResponse<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}
