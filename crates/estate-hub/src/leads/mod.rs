//! Partner lead tracking: status filtering, ranked lead lists, and pipeline totals.

pub mod domain;
mod import;
mod roster;

use crate::catalog::{ensure_unique_ids, filter_records, sort_records, CatalogLoadError, StoreError};
use std::io::Read;
use std::path::Path;

pub use domain::{Lead, LeadQuery, LeadStatus, PipelineStageSummary};

#[derive(Debug, Clone)]
pub struct LeadBook {
    leads: Vec<Lead>,
}

impl LeadBook {
    pub fn new(leads: Vec<Lead>) -> Result<Self, StoreError> {
        ensure_unique_ids("lead", leads.iter().map(|lead| lead.id))?;
        Ok(Self { leads })
    }

    pub fn standard() -> Self {
        Self {
            leads: roster::standard_leads(),
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogLoadError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogLoadError> {
        let leads = import::parse_leads(reader)?;
        Ok(Self::new(leads)?)
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    pub fn filter(&self, query: &LeadQuery) -> Vec<&Lead> {
        let status = query.status_filter();
        filter_records(
            &self.leads,
            &status,
            |lead| lead.status.label(),
            query.text.as_deref().unwrap_or_default(),
        )
    }

    pub fn search(&self, query: &LeadQuery) -> Vec<&Lead> {
        let matches = self.filter(query);
        match query.sort {
            Some(order) => sort_records(matches, order),
            None => matches,
        }
    }

    /// One entry per status in pipeline order, including empty stages.
    pub fn pipeline_summary(&self) -> Vec<PipelineStageSummary> {
        LeadStatus::ordered()
            .into_iter()
            .map(|status| {
                let in_stage = self.leads.iter().filter(|lead| lead.status == status);
                let (leads, commission_total) = in_stage.fold((0, 0.0), |(count, total), lead| {
                    (count + 1, total + lead.commission.value().unwrap_or(0.0))
                });
                PipelineStageSummary {
                    status,
                    status_label: status.label(),
                    leads,
                    commission_total,
                }
            })
            .collect()
    }
}
