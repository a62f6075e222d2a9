use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog entry as served by the upstream books API.
///
/// Fields missing from an upstream record decode to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Book {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "The Go Programming Language")]
    pub name: String,
    #[schema(example = "Alan Donovan")]
    pub author: String,
    pub units_sold: u64,
    /// Price in the smallest currency unit.
    pub price: u64,
}
