//! Service-provider directory: category and text filtering plus ranked listings.

pub mod domain;
mod import;
mod roster;

use crate::catalog::{ensure_unique_ids, filter_records, sort_records, CatalogLoadError, StoreError};
use std::io::Read;
use std::path::Path;

pub use domain::{CategorySummary, Provider, ProviderCategory, ProviderQuery};

/// Read-only provider store, built once and shared by reference.
#[derive(Debug, Clone)]
pub struct ProviderDirectory {
    providers: Vec<Provider>,
}

impl ProviderDirectory {
    pub fn new(providers: Vec<Provider>) -> Result<Self, StoreError> {
        ensure_unique_ids("provider", providers.iter().map(|provider| provider.id))?;
        Ok(Self { providers })
    }

    pub fn standard() -> Self {
        Self {
            providers: roster::standard_providers(),
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogLoadError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogLoadError> {
        let providers = import::parse_providers(reader)?;
        Ok(Self::new(providers)?)
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Provider> {
        self.providers.iter().find(|provider| provider.id == id)
    }

    /// Category, text, and flag predicates in store order.
    pub fn filter(&self, query: &ProviderQuery) -> Vec<&Provider> {
        let category = query.category_filter();
        let text = query.text.as_deref().unwrap_or_default();

        filter_records(
            &self.providers,
            &category,
            |provider| provider.profession.as_str(),
            text,
        )
        .into_iter()
        .filter(|provider| query.admits_flags(provider))
        .collect()
    }

    /// [`filter`](Self::filter) followed by the requested sort, if any.
    pub fn search(&self, query: &ProviderQuery) -> Vec<&Provider> {
        let matches = self.filter(query);
        match query.sort {
            Some(order) => sort_records(matches, order),
            None => matches,
        }
    }

    pub fn category_summaries(&self) -> Vec<CategorySummary> {
        ProviderCategory::catalog()
            .iter()
            .map(|category| CategorySummary {
                key: category.key,
                label: category.label,
                professions: category.professions,
                providers: self.filter(&ProviderQuery::default().category(category.key)).len(),
            })
            .collect()
    }
}
