use std::path::Path;

use bytes::Bytes;
use tracing::{debug, info};

use crate::aggregate::{top_emitters, TopEmitters};
use crate::charts::DashboardCharts;
use crate::clean::Dataset;
use crate::error::DashboardError;
use crate::page::render_page;

/// Everything the server needs, computed once at startup and never changed.
///
/// The page is a snapshot of the data file at the time it was built; edits to
/// the file show up only after a restart.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Dataset,
    top: TopEmitters,
    page: Bytes,
}

impl Dashboard {
    /// Load, clean, aggregate and render the file at `path`.
    pub fn load(path: impl AsRef<Path>, top_limit: usize) -> Result<Self, DashboardError> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading data");
        let dataset = Dataset::load(path)?;
        Self::build(dataset, top_limit)
    }

    pub fn build(dataset: Dataset, top_limit: usize) -> Result<Self, DashboardError> {
        info!(
            rows = dataset.rows_read(),
            kept = dataset.len(),
            dropped = dataset.rows_dropped(),
            "cleaned rows missing GDP or per-capita CO₂"
        );

        let top = top_emitters(dataset.records(), top_limit);
        match top.year {
            Some(year) => info!(year, countries = top.len(), "selected top emitters"),
            None => info!("no rows left after cleaning, charts will be empty"),
        }

        let charts = DashboardCharts::build(dataset.records(), &top);
        let page = render_page(&charts)?;
        debug!(bytes = page.len(), "rendered dashboard page");

        Ok(Self {
            dataset,
            top,
            page: Bytes::from(page),
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn top_emitters(&self) -> &TopEmitters {
        &self.top
    }

    /// The rendered HTML. Cloning is cheap.
    pub fn page(&self) -> Bytes {
        self.page.clone()
    }
}
