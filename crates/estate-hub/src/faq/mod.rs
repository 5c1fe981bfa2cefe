//! FAQ knowledge base with role scoping and keyword-relevance search.
//!
//! Visibility is resolved per [`Viewer`] before any scoring happens, so an entry
//! hidden from a role can never surface through search, however well it
//! matches.

pub mod domain;
mod library;
mod search;

use crate::catalog::{ensure_unique_ids, CatalogLoadError, StoreError};
use search::PreparedQuery;
use std::io::Read;
use std::path::Path;

pub use domain::{
    CategoryHeader, FaqCategory, FaqCategoryView, FaqEntry, FaqMatch, Role, Viewer,
};

#[derive(Debug, Clone)]
pub struct FaqKnowledgeBase {
    categories: Vec<FaqCategory>,
}

impl FaqKnowledgeBase {
    /// Category ids and entry ids must each be unique across the base.
    pub fn new(categories: Vec<FaqCategory>) -> Result<Self, StoreError> {
        ensure_unique_ids(
            "faq category",
            categories.iter().map(|category| category.id.as_str()),
        )?;
        ensure_unique_ids(
            "faq entry",
            categories
                .iter()
                .flat_map(|category| category.subcategories.iter())
                .map(|entry| entry.id.as_str()),
        )?;
        Ok(Self { categories })
    }

    pub fn standard() -> Self {
        Self {
            categories: library::standard_categories(),
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogLoadError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogLoadError> {
        let categories: Vec<FaqCategory> = serde_json::from_reader(reader)?;
        Ok(Self::new(categories)?)
    }

    pub fn categories(&self) -> &[FaqCategory] {
        &self.categories
    }

    pub fn entry_count(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.subcategories.len())
            .sum()
    }

    /// Visible categories in store order. Categories left empty by role
    /// filtering are dropped.
    pub fn categories_for(&self, viewer: Viewer) -> Vec<FaqCategoryView<'_>> {
        self.categories
            .iter()
            .filter_map(|category| {
                let subcategories: Vec<&FaqEntry> = category
                    .subcategories
                    .iter()
                    .filter(|entry| viewer.can_see(entry))
                    .collect();

                if subcategories.is_empty() {
                    None
                } else {
                    Some(FaqCategoryView {
                        id: &category.id,
                        title: &category.title,
                        subcategories,
                    })
                }
            })
            .collect()
    }

    /// Visible entries with positive relevance, highest first; equal scores
    /// keep store order. A blank query returns nothing.
    pub fn search(&self, query: &str, viewer: Viewer) -> Vec<FaqMatch<'_>> {
        let Some(prepared) = PreparedQuery::new(query) else {
            return Vec::new();
        };

        let mut matches: Vec<FaqMatch<'_>> = self
            .categories_for(viewer)
            .into_iter()
            .flat_map(|view| {
                let header = CategoryHeader {
                    id: view.id,
                    title: view.title,
                };
                let prepared = &prepared;
                view.subcategories.into_iter().filter_map(move |entry| {
                    let relevance = search::relevance(prepared, header.title, entry);
                    (relevance > 0).then_some(FaqMatch {
                        category: header,
                        subcategory: entry,
                        relevance,
                    })
                })
            })
            .collect();

        matches.sort_by(|left, right| right.relevance.cmp(&left.relevance));
        matches
    }

    /// A single entry, if it exists and is visible to `viewer`.
    pub fn lookup(
        &self,
        category_id: &str,
        entry_id: &str,
        viewer: Viewer,
    ) -> Option<(&FaqCategory, &FaqEntry)> {
        let category = self
            .categories
            .iter()
            .find(|category| category.id == category_id)?;
        let entry = category
            .subcategories
            .iter()
            .find(|entry| entry.id == entry_id)?;
        viewer.can_see(entry).then_some((category, entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_ids(matches: &[FaqMatch<'_>]) -> Vec<String> {
        matches
            .iter()
            .map(|hit| hit.subcategory.id.clone())
            .collect()
    }

    #[test]
    fn standard_base_has_unique_ids() {
        let base = FaqKnowledgeBase::standard();
        assert!(FaqKnowledgeBase::new(base.categories().to_vec()).is_ok());
    }

    #[test]
    fn duplicate_entry_ids_are_rejected() {
        let mut categories = FaqKnowledgeBase::standard().categories().to_vec();
        let copied = categories[0].subcategories[0].clone();
        categories[1].subcategories.push(copied);
        let err = FaqKnowledgeBase::new(categories).expect_err("duplicate rejected");
        assert_eq!(
            err,
            StoreError::DuplicateId {
                store: "faq entry",
                id: "login-issues".to_string(),
            }
        );
    }

    #[test]
    fn buyer_view_drops_seller_only_category() {
        let base = FaqKnowledgeBase::standard();
        let buyer = base.categories_for(Viewer::new(Role::Buyer));
        assert!(buyer.iter().all(|view| view.id != "selling"));

        let seller = base.categories_for(Viewer::new(Role::Seller));
        let buying = seller
            .iter()
            .find(|view| view.id == "buying")
            .expect("buying category keeps its shared entry");
        assert_eq!(buying.subcategories.len(), 1);
        assert_eq!(buying.subcategories[0].id, "token-amount");
    }

    #[test]
    fn login_search_ranks_title_match_first() {
        let base = FaqKnowledgeBase::standard();
        let matches = base.search("login", Viewer::new(Role::Buyer));
        assert_eq!(
            entry_ids(&matches),
            vec!["login-issues", "password-reset", "profile-verification"]
        );
        assert_eq!(matches[0].relevance, 15);
        assert_eq!(matches[1].relevance, 9);
    }

    #[test]
    fn seller_only_entry_surfaces_for_sellers() {
        let base = FaqKnowledgeBase::standard();
        let matches = base.search("login", Viewer::new(Role::Seller));
        assert!(entry_ids(&matches).contains(&"seller-dashboard".to_string()));
    }

    #[test]
    fn blank_query_returns_nothing() {
        let base = FaqKnowledgeBase::standard();
        assert!(base.search("   ", Viewer::new(Role::Admin)).is_empty());
    }

    #[test]
    fn lookup_respects_visibility() {
        let base = FaqKnowledgeBase::standard();
        assert!(base
            .lookup("selling", "pricing-guidance", Viewer::new(Role::Seller))
            .is_some());
        assert!(base
            .lookup("selling", "pricing-guidance", Viewer::new(Role::Buyer))
            .is_none());
        assert!(base
            .lookup("selling", "pricing-guidance", Viewer::new(Role::Admin).acting_as(Role::Buyer))
            .is_none());
        assert!(base
            .lookup("account", "missing", Viewer::new(Role::Admin))
            .is_none());
    }

    #[test]
    fn loads_from_json() {
        let json = r#"[
            {"id": "general", "title": "General", "subcategories": [
                {"id": "hours", "title": "Support Hours", "resolution": "We are available 9 to 6."},
                {"id": "sell-tips", "title": "Selling Tips", "resolution": "Stage your home.", "sellerSpecific": true}
            ]}
        ]"#;
        let base = FaqKnowledgeBase::from_reader(json.as_bytes()).expect("json loads");
        assert_eq!(base.entry_count(), 2);
        assert_eq!(base.categories_for(Viewer::new(Role::Buyer))[0].subcategories.len(), 1);
    }
}
