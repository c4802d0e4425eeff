//! Product catalog query command.

use crate::catalog::{paginate, ProductCatalog, DEFAULT_PAGE_LIMIT};
use crate::cli::common::{CliError, CliResult};
use clap::Args;
use std::path::PathBuf;

/// Query a product catalog file for makeup products
#[derive(Debug, Clone, Args)]
pub struct ProductsArgs {
    /// Path to product catalog JSON file
    #[arg(short, long, value_name = "FILE")]
    pub catalog: PathBuf,

    /// Monk skin tone tag to filter by (e.g., "Monk 4")
    #[arg(long, value_name = "TAG")]
    pub mst: Option<String>,

    /// 1-based page number
    #[arg(long, default_value = "1")]
    pub page: usize,

    /// Page size (clamped server-side to 15)
    #[arg(long, default_value_t = DEFAULT_PAGE_LIMIT)]
    pub limit: usize,

    /// Output result as JSON
    #[arg(long)]
    pub json: bool,
}

impl ProductsArgs {
    /// Execute the products command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = ProductCatalog::load(&self.catalog)
            .map_err(|e| CliError::io(format!("Failed to load catalog: {e}")))?;

        let matches = catalog.query(self.mst.as_deref());
        let page = paginate(&matches, self.page, self.limit);

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&page)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!(
                "Page {}/{} ({} products total)",
                page.page,
                page.total_pages.max(1),
                page.total_items
            );
            println!();
            for product in &page.data {
                let mst = product.mst.as_deref().unwrap_or("-");
                println!(
                    "  [{}] {} - {} {} (mst: {})",
                    product.id, product.name, product.brand, product.price, mst
                );
            }
        }

        Ok(())
    }
}
