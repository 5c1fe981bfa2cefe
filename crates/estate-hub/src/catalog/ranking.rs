use super::error::QueryParseError;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    Rating,
    PriceLow,
    PriceHigh,
    Experience,
    LastUpdated,
    Name,
    SubmissionDate,
    Commission,
}

impl SortKey {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Rating,
            Self::PriceLow,
            Self::PriceHigh,
            Self::Experience,
            Self::LastUpdated,
            Self::Name,
            Self::SubmissionDate,
            Self::Commission,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Experience => "experience",
            Self::LastUpdated => "last-updated",
            Self::Name => "name",
            Self::SubmissionDate => "submission-date",
            Self::Commission => "commission",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Rating => "Highest rated",
            Self::PriceLow => "Price: low to high",
            Self::PriceHigh => "Price: high to low",
            Self::Experience => "Most experienced",
            Self::LastUpdated => "Recently updated",
            Self::Name => "Name",
            Self::SubmissionDate => "Newest submissions",
            Self::Commission => "Commission amount",
        }
    }

    /// Direction applied when the caller does not pick one.
    pub const fn default_direction(self) -> SortDirection {
        match self {
            Self::PriceLow | Self::Name => SortDirection::Ascending,
            Self::Rating
            | Self::PriceHigh
            | Self::Experience
            | Self::LastUpdated
            | Self::SubmissionDate
            | Self::Commission => SortDirection::Descending,
        }
    }
}

impl FromStr for SortKey {
    type Err = QueryParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace('_', "-");
        Self::ordered()
            .into_iter()
            .find(|key| key.key() == normalized)
            .ok_or_else(|| QueryParseError::SortKey(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl FromStr for SortDirection {
    type Err = QueryParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(QueryParseError::Direction(raw.to_string())),
        }
    }
}

/// Sort key plus an optional explicit direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub key: SortKey,
    pub direction: Option<SortDirection>,
}

impl SortOrder {
    pub fn new(key: SortKey) -> Self {
        Self {
            key,
            direction: None,
        }
    }

    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
            .unwrap_or_else(|| self.key.default_direction())
    }

    /// Order for a listing of `T`. No key means store order; a key `T` does not
    /// rank by is rejected.
    pub fn for_listing<T: Ranked>(
        key: Option<SortKey>,
        direction: Option<SortDirection>,
    ) -> Result<Option<Self>, QueryParseError> {
        let Some(key) = key else {
            return Ok(None);
        };
        if !T::supports(key) {
            return Err(QueryParseError::UnsupportedSort(key.key()));
        }

        let order = Self::new(key);
        Ok(Some(match direction {
            Some(direction) => order.with_direction(direction),
            None => order,
        }))
    }
}

/// Comparable value a record yields for one sort key.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    /// `None` is the sentinel for malformed or missing magnitudes and orders
    /// below every real number.
    Number(Option<f64>),
    /// Compared case-insensitively.
    Text(String),
    Day(NaiveDate),
    Moment(NaiveDateTime),
}

impl SortValue {
    pub fn text(value: &str) -> Self {
        Self::Text(value.to_lowercase())
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(left), Self::Number(right)) => match (left, right) {
                (Some(left), Some(right)) => left.total_cmp(right),
                (Some(_), None) => Ordering::Greater,
                (None, Some(_)) => Ordering::Less,
                (None, None) => Ordering::Equal,
            },
            (Self::Text(left), Self::Text(right)) => left.cmp(right),
            (Self::Day(left), Self::Day(right)) => left.cmp(right),
            (Self::Moment(left), Self::Moment(right)) => left.cmp(right),
            _ => Ordering::Equal,
        }
    }
}

/// Records that can be placed in a ranked list.
pub trait Ranked {
    /// Keys meaningful for this record type.
    const SORT_KEYS: &'static [SortKey];

    fn sort_value(&self, key: SortKey) -> SortValue;

    fn supports(key: SortKey) -> bool {
        Self::SORT_KEYS.contains(&key)
    }
}

/// Stable sort: records with equal values keep their input order in either
/// direction, since descending reverses the comparison rather than the output.
pub fn sort_records<'a, T: Ranked>(records: Vec<&'a T>, order: SortOrder) -> Vec<&'a T> {
    let direction = order.direction();
    let mut keyed: Vec<(SortValue, &'a T)> = records
        .into_iter()
        .map(|record| (record.sort_value(order.key), record))
        .collect();

    keyed.sort_by(|(left, _), (right, _)| {
        let ordering = left.compare(right);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    keyed.into_iter().map(|(_, record)| record).collect()
}
