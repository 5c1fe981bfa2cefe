use crate::catalog::{
    CategoryFilter, Magnitude, Ranked, Rating, Searchable, SortKey, SortOrder, SortValue, ALL_KEY,
};
use serde::Serialize;

/// A listed service provider. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Provider {
    pub id: u32,
    pub name: String,
    pub profession: String,
    pub location: String,
    pub rating: Rating,
    pub reviews: u32,
    pub price: Magnitude,
    pub experience: Magnitude,
    pub specialties: Vec<String>,
    pub languages: Vec<String>,
    pub verified: bool,
    pub available: bool,
}

impl Searchable for Provider {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.location.as_str()]
    }
}

impl Ranked for Provider {
    const SORT_KEYS: &'static [SortKey] = &[
        SortKey::Rating,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Experience,
        SortKey::Name,
    ];

    fn sort_value(&self, key: SortKey) -> SortValue {
        match key {
            SortKey::Rating => SortValue::Number(self.rating.value()),
            SortKey::PriceLow | SortKey::PriceHigh => SortValue::Number(self.price.value()),
            SortKey::Experience => SortValue::Number(self.experience.value()),
            SortKey::Name => SortValue::text(&self.name),
            SortKey::LastUpdated | SortKey::SubmissionDate | SortKey::Commission => {
                SortValue::Number(None)
            }
        }
    }
}

/// Directory section and the profession labels it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProviderCategory {
    pub key: &'static str,
    pub label: &'static str,
    pub professions: &'static [&'static str],
}

impl ProviderCategory {
    pub const fn catalog() -> &'static [ProviderCategory] {
        PROVIDER_CATEGORIES
    }

    pub fn find(key: &str) -> Option<&'static ProviderCategory> {
        let key = key.trim();
        PROVIDER_CATEGORIES
            .iter()
            .find(|category| category.key.eq_ignore_ascii_case(key))
    }

    /// Resolves a caller key into a predicate. `"all"` and blank keys are unrestricted.
    pub fn filter_for(key: &str) -> CategoryFilter {
        let trimmed = key.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_KEY) {
            return CategoryFilter::All;
        }

        match Self::find(trimmed) {
            Some(category) => CategoryFilter::labels(category.professions),
            None => CategoryFilter::Unknown(trimmed.to_string()),
        }
    }
}

const PROVIDER_CATEGORIES: &[ProviderCategory] = &[
    ProviderCategory {
        key: "lawyer",
        label: "Property Lawyers",
        professions: &["Property Lawyer"],
    },
    ProviderCategory {
        key: "painter",
        label: "Painters",
        professions: &["Painter"],
    },
    ProviderCategory {
        key: "electrician",
        label: "Electricians",
        professions: &["Electrician"],
    },
    ProviderCategory {
        key: "plumber",
        label: "Plumbers",
        professions: &["Plumber"],
    },
    ProviderCategory {
        key: "interior",
        label: "Interior Designers",
        professions: &["Interior Designer", "Interior Decorator"],
    },
    ProviderCategory {
        key: "movers",
        label: "Packers & Movers",
        professions: &["Packers & Movers", "Relocation"],
    },
    ProviderCategory {
        key: "inspector",
        label: "Home Inspectors",
        professions: &["Home Inspector"],
    },
    ProviderCategory {
        key: "carpenter",
        label: "Carpenters",
        professions: &["Carpenter"],
    },
    ProviderCategory {
        key: "cleaning",
        label: "Cleaning Services",
        professions: &["Cleaning Services", "Deep Cleaning"],
    },
];

/// Caller-supplied constraints for a directory listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderQuery {
    pub category: Option<String>,
    pub text: Option<String>,
    pub verified_only: bool,
    pub available_only: bool,
    pub language: Option<String>,
    pub sort: Option<SortOrder>,
}

impl ProviderQuery {
    pub fn category(mut self, key: impl Into<String>) -> Self {
        self.category = Some(key.into());
        self
    }

    pub fn text(mut self, query: impl Into<String>) -> Self {
        self.text = Some(query.into());
        self
    }

    pub fn verified_only(mut self) -> Self {
        self.verified_only = true;
        self
    }

    pub fn available_only(mut self) -> Self {
        self.available_only = true;
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn sorted_by(mut self, order: SortOrder) -> Self {
        self.sort = Some(order);
        self
    }

    pub(crate) fn category_filter(&self) -> CategoryFilter {
        self.category
            .as_deref()
            .map(ProviderCategory::filter_for)
            .unwrap_or(CategoryFilter::All)
    }

    pub(crate) fn admits_flags(&self, provider: &Provider) -> bool {
        if self.verified_only && !provider.verified {
            return false;
        }
        if self.available_only && !provider.available {
            return false;
        }

        match self.language.as_deref().map(str::trim) {
            Some(language) if !language.is_empty() => provider
                .languages
                .iter()
                .any(|spoken| spoken.eq_ignore_ascii_case(language)),
            _ => true,
        }
    }
}

/// Directory section with the number of providers it currently lists.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub key: &'static str,
    pub label: &'static str,
    pub professions: &'static [&'static str],
    pub providers: usize,
}
