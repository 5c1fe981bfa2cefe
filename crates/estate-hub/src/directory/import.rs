use super::domain::Provider;
use crate::catalog::{CatalogLoadError, Magnitude, Rating};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct ProviderRow {
    id: u32,
    name: String,
    profession: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    rating: String,
    #[serde(default)]
    reviews: String,
    #[serde(default)]
    price: String,
    #[serde(default)]
    experience: String,
    #[serde(default)]
    specialties: String,
    #[serde(default)]
    languages: String,
    #[serde(default)]
    verified: String,
    #[serde(default)]
    available: String,
}

pub(crate) fn parse_providers<R: Read>(reader: R) -> Result<Vec<Provider>, CatalogLoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut providers = Vec::new();

    for (index, record) in csv_reader.deserialize::<ProviderRow>().enumerate() {
        let row = record?;
        providers.push(row.into_provider(index + 1)?);
    }

    Ok(providers)
}

impl ProviderRow {
    fn into_provider(self, row: usize) -> Result<Provider, CatalogLoadError> {
        if self.name.trim().is_empty() {
            return Err(CatalogLoadError::InvalidRow {
                row,
                reason: "provider name is empty".to_string(),
            });
        }

        let reviews = match self.reviews.trim() {
            "" => 0,
            raw => raw
                .replace(',', "")
                .parse::<u32>()
                .map_err(|_| CatalogLoadError::InvalidRow {
                    row,
                    reason: format!("review count '{raw}' is not a whole number"),
                })?,
        };

        Ok(Provider {
            id: self.id,
            name: self.name,
            profession: self.profession,
            location: self.location,
            rating: Rating::parse(&self.rating),
            reviews,
            price: Magnitude::parse(self.price),
            experience: Magnitude::parse(self.experience),
            specialties: split_tags(&self.specialties),
            languages: split_tags(&self.languages),
            verified: parse_flag(&self.verified),
            available: parse_flag(&self.available),
        })
    }
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "y" | "1"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id,name,profession,location,rating,reviews,price,experience,specialties,languages,verified,available\n";

    #[test]
    fn parses_rows_with_display_amounts() {
        let csv = format!(
            "{HEADER}7,Brush & Roller Co,Painter,Thane,4.8,\"1,187\",₹18 per sq.ft,6+ years,Interior Painting; Stencils,Hindi;English,yes,\n"
        );
        let providers = parse_providers(csv.as_bytes()).expect("csv parses");
        assert_eq!(providers.len(), 1);

        let provider = &providers[0];
        assert_eq!(provider.id, 7);
        assert_eq!(provider.reviews, 1187);
        assert_eq!(provider.price.value(), Some(18.0));
        assert_eq!(provider.price.display(), "₹18 per sq.ft");
        assert_eq!(provider.experience.value(), Some(6.0));
        assert_eq!(provider.specialties, vec!["Interior Painting", "Stencils"]);
        assert!(provider.verified);
        assert!(!provider.available);
    }

    #[test]
    fn unparsable_rating_is_kept_as_sentinel() {
        let csv = format!("{HEADER}1,Volt Masters,Electrician,Powai,new,,,,,,,\n");
        let providers = parse_providers(csv.as_bytes()).expect("csv parses");
        assert_eq!(providers[0].rating.value(), None);
        assert_eq!(providers[0].reviews, 0);
    }

    #[test]
    fn bad_review_count_reports_row() {
        let csv = format!("{HEADER}1,A,Plumber,Pune,4,many,,,,,,\n2,B,Plumber,Pune,4,3,,,,,,\n");
        let err = parse_providers(csv.as_bytes()).expect_err("row rejected");
        assert!(matches!(err, CatalogLoadError::InvalidRow { row: 1, .. }));
    }

    #[test]
    fn flags_accept_common_spellings() {
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" 1 "));
        assert!(!parse_flag("no"));
        assert!(!parse_flag(""));
    }
}
