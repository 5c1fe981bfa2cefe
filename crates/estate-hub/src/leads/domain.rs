use crate::catalog::{
    CategoryFilter, Magnitude, QueryParseError, Ranked, Searchable, SortKey, SortOrder, SortValue,
    ALL_KEY,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeadStatus {
    New,
    Contacted,
    SiteVisit,
    Negotiation,
    Closed,
    Lost,
}

impl LeadStatus {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::New,
            Self::Contacted,
            Self::SiteVisit,
            Self::Negotiation,
            Self::Closed,
            Self::Lost,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::SiteVisit => "site-visit",
            Self::Negotiation => "negotiation",
            Self::Closed => "closed",
            Self::Lost => "lost",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Contacted => "Contacted",
            Self::SiteVisit => "Site Visit",
            Self::Negotiation => "Negotiation",
            Self::Closed => "Closed",
            Self::Lost => "Lost",
        }
    }

    /// `"all"` and blank keys are unrestricted; unknown keys match nothing.
    pub fn filter_for(key: &str) -> CategoryFilter {
        let trimmed = key.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_KEY) {
            return CategoryFilter::All;
        }

        match trimmed.parse::<Self>() {
            Ok(status) => CategoryFilter::labels([status.label()]),
            Err(_) => CategoryFilter::Unknown(trimmed.to_string()),
        }
    }
}

impl FromStr for LeadStatus {
    type Err = QueryParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        Self::ordered()
            .into_iter()
            .find(|status| status.key() == normalized)
            .ok_or_else(|| QueryParseError::LeadStatus(raw.to_string()))
    }
}

/// A lead submitted by a partner agent. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lead {
    pub id: u32,
    pub name: String,
    pub property: String,
    pub status: LeadStatus,
    pub submitted_on: NaiveDate,
    pub last_updated: NaiveDateTime,
    pub commission: Magnitude,
}

impl Lead {
    pub fn status_label(&self) -> &'static str {
        self.status.label()
    }
}

impl Searchable for Lead {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.property.as_str()]
    }
}

impl Ranked for Lead {
    const SORT_KEYS: &'static [SortKey] = &[
        SortKey::LastUpdated,
        SortKey::Name,
        SortKey::SubmissionDate,
        SortKey::Commission,
    ];

    fn sort_value(&self, key: SortKey) -> SortValue {
        match key {
            SortKey::LastUpdated => SortValue::Moment(self.last_updated),
            SortKey::Name => SortValue::text(&self.name),
            SortKey::SubmissionDate => SortValue::Day(self.submitted_on),
            SortKey::Commission => SortValue::Number(self.commission.value()),
            SortKey::Rating | SortKey::PriceLow | SortKey::PriceHigh | SortKey::Experience => {
                SortValue::Number(None)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadQuery {
    pub status: Option<String>,
    pub text: Option<String>,
    pub sort: Option<SortOrder>,
}

impl LeadQuery {
    pub fn status(mut self, key: impl Into<String>) -> Self {
        self.status = Some(key.into());
        self
    }

    pub fn text(mut self, query: impl Into<String>) -> Self {
        self.text = Some(query.into());
        self
    }

    pub fn sorted_by(mut self, order: SortOrder) -> Self {
        self.sort = Some(order);
        self
    }

    pub(crate) fn status_filter(&self) -> CategoryFilter {
        self.status
            .as_deref()
            .map(LeadStatus::filter_for)
            .unwrap_or(CategoryFilter::All)
    }
}

/// Lead count and summed commission for one pipeline stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineStageSummary {
    pub status: LeadStatus,
    pub status_label: &'static str,
    pub leads: usize,
    pub commission_total: f64,
}
