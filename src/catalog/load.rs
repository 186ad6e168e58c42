use super::{Catalog, CatalogBuildResult};
use anyhow::{bail, Result};
use std::path::Path;
use tracing::{info, warn};

/// Loads the catalog from `path`, or the built-in fixture when no path is given,
/// logging every problem found on the way.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let catalog_result: CatalogBuildResult = match path {
        Some(path) => {
            info!("Loading catalog from {}...", path.display());
            Catalog::build(path)
        }
        None => {
            info!("Loading built-in catalog...");
            Catalog::builtin()
        }
    };
    let problems = catalog_result.problems;
    let catalog = catalog_result.catalog;

    if !problems.is_empty() {
        warn!("Found {} problems:", problems.len());
        for problem in problems.iter() {
            warn!("- {:?}", problem);
        }
    }

    match (&catalog, problems.is_empty()) {
        (Some(_), true) => info!("Catalog checked, no issues found."),
        (Some(_), false) => info!(
            "Catalog was built, but check the {} non-fatal issues above.",
            problems.len()
        ),
        (None, _) => {
            info!(
                "Check the {} problems above, the catalog could not be initialized.",
                problems.len()
            )
        }
    }
    if let Some(catalog) = catalog {
        info!(
            "Catalog has:\n{} fragrances\n{} reviews\n{} deals\n{} marketplace listings",
            catalog.get_fragrances_count(),
            catalog.get_reviews_count(),
            catalog.deals().len(),
            catalog.listings().len(),
        );
        return Ok(catalog);
    }

    bail!("Could not load catalog");
}
