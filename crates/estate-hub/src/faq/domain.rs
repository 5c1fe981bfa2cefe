use crate::catalog::QueryParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Buyer,
    Seller,
    Admin,
}

impl Role {
    pub const fn ordered() -> [Self; 3] {
        [Self::Buyer, Self::Seller, Self::Admin]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Buyer => "Buyer",
            Self::Seller => "Seller",
            Self::Admin => "Admin",
        }
    }
}

impl FromStr for Role {
    type Err = QueryParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "buyer" => Ok(Self::Buyer),
            "seller" => Ok(Self::Seller),
            "admin" => Ok(Self::Admin),
            _ => Err(QueryParseError::Role(raw.to_string())),
        }
    }
}

/// Who is reading the knowledge base. Admins may preview another role's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer {
    pub role: Role,
    pub acting_as: Option<Role>,
}

impl Viewer {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            acting_as: None,
        }
    }

    pub fn acting_as(mut self, role: Role) -> Self {
        self.acting_as = Some(role);
        self
    }

    /// `acting_as` only takes effect for admins.
    pub fn effective_role(&self) -> Role {
        match (self.role, self.acting_as) {
            (Role::Admin, Some(preview)) => preview,
            (role, _) => role,
        }
    }

    pub fn can_see(&self, entry: &FaqEntry) -> bool {
        match self.effective_role() {
            Role::Admin => true,
            Role::Buyer => !entry.seller_specific,
            Role::Seller => !entry.buyer_specific,
        }
    }
}

impl From<Role> for Viewer {
    fn from(role: Role) -> Self {
        Self::new(role)
    }
}

/// Top-level FAQ section grouping related entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqCategory {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subcategories: Vec<FaqEntry>,
}

/// A single question with its resolution text and optional role scoping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: String,
    pub title: String,
    pub resolution: String,
    #[serde(default, alias = "buyerSpecific")]
    pub buyer_specific: bool,
    #[serde(default, alias = "sellerSpecific")]
    pub seller_specific: bool,
}

/// Role-filtered category as rendered to a viewer.
#[derive(Debug, Clone, Serialize)]
pub struct FaqCategoryView<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub subcategories: Vec<&'a FaqEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryHeader<'a> {
    pub id: &'a str,
    pub title: &'a str,
}

/// Search hit: the parent category, the matching entry, and its relevance.
#[derive(Debug, Clone, Serialize)]
pub struct FaqMatch<'a> {
    pub category: CategoryHeader<'a>,
    pub subcategory: &'a FaqEntry,
    pub relevance: u32,
}
