//! A single catalogue row.

use serde::{Deserialize, Serialize};

/// A kosher product and where it can be bought.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Product name.
    pub name: String,
    /// Shelf category, e.g. `"Bebidas"`.
    pub category: String,
    /// Neighbourhood or shop where the product is sold.
    pub location: String,
}
