use crate::catalog::CatalogLoadError;
use crate::config::CatalogConfig;
use crate::directory::ProviderDirectory;
use crate::faq::FaqKnowledgeBase;
use crate::leads::LeadBook;
use tracing::info;

/// Every catalog the marketplace serves, built once at startup and shared
/// read-only (typically behind an `Arc`) by all request handlers.
#[derive(Debug, Clone)]
pub struct MarketplaceStore {
    providers: ProviderDirectory,
    faq: FaqKnowledgeBase,
    leads: LeadBook,
}

impl MarketplaceStore {
    pub fn new(providers: ProviderDirectory, faq: FaqKnowledgeBase, leads: LeadBook) -> Self {
        Self {
            providers,
            faq,
            leads,
        }
    }

    pub fn standard() -> Self {
        Self::new(
            ProviderDirectory::standard(),
            FaqKnowledgeBase::standard(),
            LeadBook::standard(),
        )
    }

    /// Uses each configured export when present, otherwise the built-in data.
    pub fn load(config: &CatalogConfig) -> Result<Self, CatalogLoadError> {
        let providers = match &config.providers_csv {
            Some(path) => {
                info!(path = %path.display(), "loading provider roster");
                ProviderDirectory::from_path(path)?
            }
            None => ProviderDirectory::standard(),
        };

        let faq = match &config.faq_json {
            Some(path) => {
                info!(path = %path.display(), "loading faq knowledge base");
                FaqKnowledgeBase::from_path(path)?
            }
            None => FaqKnowledgeBase::standard(),
        };

        let leads = match &config.leads_csv {
            Some(path) => {
                info!(path = %path.display(), "loading partner leads");
                LeadBook::from_path(path)?
            }
            None => LeadBook::standard(),
        };

        let store = Self::new(providers, faq, leads);
        info!(
            providers = store.providers.len(),
            faq_entries = store.faq.entry_count(),
            leads = store.leads.len(),
            "marketplace catalogs ready"
        );
        Ok(store)
    }

    pub fn providers(&self) -> &ProviderDirectory {
        &self.providers
    }

    pub fn faq(&self) -> &FaqKnowledgeBase {
        &self.faq
    }

    pub fn leads(&self) -> &LeadBook {
        &self.leads
    }
}
