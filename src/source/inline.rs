// src/source/inline.rs

use tracing::debug;

use crate::errors::Result;
use crate::series::Series;
use crate::source::{PlanSource, warn_on_gaps};

/// Plan written directly into the config file.
#[derive(Debug, Clone)]
pub struct InlinePlanSource {
    plan: Series,
}

impl InlinePlanSource {
    pub fn new(plan: Series) -> Self {
        Self { plan }
    }
}

impl PlanSource for InlinePlanSource {
    fn load_plan(&self) -> Result<Series> {
        debug!(entries = self.plan.len(), "using inline plan");
        warn_on_gaps(&self.plan);
        Ok(self.plan.clone())
    }
}
