//! # luach-catalog
//!
//! Read-only catalogue of kosher products sold in Fortaleza, loaded from CSV.
//!
//! ## Quick Start
//!
//! ```
//! use luach_catalog::Catalog;
//!
//! let catalog = Catalog::bundled().unwrap();
//! for product in catalog.by_category("Bebidas") {
//!     println!("{} ({})", product.name, product.location);
//! }
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `catalog` | CSV loading and lookups |
//! | `record` | The `ProductRecord` row type |
//! | `error` | Error types |

mod catalog;
mod error;
mod record;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use record::ProductRecord;
