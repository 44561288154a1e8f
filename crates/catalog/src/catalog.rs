//! Loading and querying the product catalogue.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::CatalogError;
use crate::record::ProductRecord;

/// CSV compiled into the binary, used when no catalogue path is configured.
const BUNDLED_CSV: &str = include_str!("../data/kosher_products.csv");

/// Immutable, ordered list of products.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ProductRecord>,
}

impl Catalog {
    /// Parses a catalogue from CSV with a `name,category,location` header.
    ///
    /// Surrounding whitespace is trimmed from every field.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Csv`] on malformed CSV or missing columns, and
    /// [`CatalogError::EmptyField`] if a row has a blank name.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for (i, row) in reader.deserialize::<ProductRecord>().enumerate() {
            let record = row?;
            if record.name.is_empty() {
                return Err(CatalogError::EmptyField {
                    row: i + 1,
                    field: "name",
                });
            }
            records.push(record);
        }

        debug!(records = records.len(), "parsed catalog");
        Ok(Self { records })
    }

    /// Reads a catalogue from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be opened, otherwise
    /// as [`from_reader`](Self::from_reader).
    #[tracing::instrument(level = "debug")]
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let file = File::open(path).map_err(|e| CatalogError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_reader(file)
    }

    /// Returns the catalogue shipped with the binary.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled CSV is malformed.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_reader(BUNDLED_CSV.as_bytes())
    }

    /// Returns all products in file order.
    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    /// Returns the number of products.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the catalogue has no products.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the products in `category`, compared case-insensitively.
    pub fn by_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a ProductRecord> + 'a {
        let wanted = category.trim().to_lowercase();
        self.records
            .iter()
            .filter(move |r| r.category.to_lowercase() == wanted)
    }
}
