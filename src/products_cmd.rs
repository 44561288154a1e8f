//! Products command: list the catalogue.

use anyhow::Result;
use tracing::info_span;

use crate::cli::ProductsArgs;
use crate::config::LuachConfig;
use crate::convert;

/// Prints the catalogue, optionally restricted to one category.
pub fn run(args: ProductsArgs, config: &LuachConfig) -> Result<()> {
    let _cmd = info_span!("products").entered();

    let path = args.catalog.as_deref().or(config.catalog.path.as_deref());
    let catalog = convert::load_catalog(path)?;

    let products: Vec<_> = match args.category.as_deref() {
        Some(category) => catalog.by_category(category).collect(),
        None => catalog.records().iter().collect(),
    };
    for product in products {
        println!("{}\t{}\t{}", product.name, product.category, product.location);
    }
    Ok(())
}
