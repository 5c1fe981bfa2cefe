/// Category key meaning "no category restriction".
pub const ALL_KEY: &str = "all";

/// Records that expose a fixed set of free-text fields to query matching.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// Category predicate resolved from a caller-supplied key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    /// Lower-cased labels; a record matches when its category field contains any of them.
    Labels(Vec<String>),
    /// Key that maps to no known category. Matches nothing.
    Unknown(String),
}

impl CategoryFilter {
    pub fn labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::Labels(
            labels
                .into_iter()
                .map(|label| label.as_ref().to_lowercase())
                .collect(),
        )
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Labels(labels) => {
                let value = value.to_lowercase();
                labels.iter().any(|label| value.contains(label.as_str()))
            }
            Self::Unknown(_) => false,
        }
    }
}

pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// True when the normalized query is empty or a substring of any searchable field.
pub fn matches_text<T: Searchable + ?Sized>(record: &T, normalized_query: &str) -> bool {
    if normalized_query.is_empty() {
        return true;
    }

    record
        .search_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(normalized_query))
}

/// Applies the category predicate on `category_of(record)` and then the text
/// query, preserving store order.
pub fn filter_records<'a, T, F>(
    records: &'a [T],
    category: &CategoryFilter,
    category_of: F,
    query: &str,
) -> Vec<&'a T>
where
    T: Searchable,
    F: Fn(&T) -> &str,
{
    let query = normalize_query(query);
    records
        .iter()
        .filter(|record| category.matches(category_of(record)))
        .filter(|record| matches_text(*record, &query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Listing {
        name: &'static str,
        city: &'static str,
        kind: &'static str,
    }

    impl Searchable for Listing {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.city]
        }
    }

    fn listings() -> Vec<Listing> {
        vec![
            Listing {
                name: "Sharma Legal Associates",
                city: "Pune",
                kind: "Property Lawyer",
            },
            Listing {
                name: "ColorCraft Painters",
                city: "Mumbai",
                kind: "Painter",
            },
            Listing {
                name: "Deshpande & Co",
                city: "Pune",
                kind: "Senior Property Lawyer",
            },
        ]
    }

    #[test]
    fn label_match_is_case_insensitive_containment() {
        let filter = CategoryFilter::labels(["property lawyer"]);
        assert!(filter.matches("Senior PROPERTY Lawyer"));
        assert!(!filter.matches("Painter"));
    }

    #[test]
    fn unknown_category_matches_nothing() {
        let records = listings();
        let result = filter_records(
            &records,
            &CategoryFilter::Unknown("astrologer".to_string()),
            |listing| listing.kind,
            "",
        );
        assert!(result.is_empty());
    }

    #[test]
    fn text_query_restricts_and_keeps_order() {
        let records = listings();
        let result = filter_records(&records, &CategoryFilter::All, |listing| listing.kind, " PUNE ");
        let names: Vec<_> = result.iter().map(|listing| listing.name).collect();
        assert_eq!(names, vec!["Sharma Legal Associates", "Deshpande & Co"]);
    }

    #[test]
    fn blank_query_is_no_restriction() {
        let records = listings();
        let result = filter_records(&records, &CategoryFilter::All, |listing| listing.kind, "   ");
        assert_eq!(result.len(), records.len());
    }
}
