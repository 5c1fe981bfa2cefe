use super::domain::{Lead, LeadStatus};
use crate::catalog::{CatalogLoadError, Magnitude};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct LeadRow {
    id: u32,
    name: String,
    #[serde(default)]
    property: String,
    status: String,
    submitted_on: String,
    #[serde(default)]
    last_updated: String,
    #[serde(default)]
    commission: String,
}

pub(crate) fn parse_leads<R: Read>(reader: R) -> Result<Vec<Lead>, CatalogLoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut leads = Vec::new();

    for (index, record) in csv_reader.deserialize::<LeadRow>().enumerate() {
        let row = record?;
        leads.push(row.into_lead(index + 1)?);
    }

    Ok(leads)
}

impl LeadRow {
    fn into_lead(self, row: usize) -> Result<Lead, CatalogLoadError> {
        let invalid = |reason: String| CatalogLoadError::InvalidRow { row, reason };

        let status = self
            .status
            .parse::<LeadStatus>()
            .map_err(|err| invalid(err.to_string()))?;
        let submitted_on = NaiveDate::parse_from_str(&self.submitted_on, "%Y-%m-%d")
            .map_err(|err| invalid(format!("submitted_on '{}': {err}", self.submitted_on)))?;
        // A lead never touched since submission reports its submission day.
        let last_updated = match parse_datetime(&self.last_updated) {
            Some(moment) => moment,
            None if self.last_updated.is_empty() => submitted_on
                .and_hms_opt(0, 0, 0)
                .ok_or_else(|| invalid("submission day has no midnight".to_string()))?,
            None => {
                return Err(invalid(format!(
                    "last_updated '{}' is not a date or timestamp",
                    self.last_updated
                )))
            }
        };

        Ok(Lead {
            id: self.id,
            name: self.name,
            property: self.property,
            status,
            submitted_on,
            last_updated,
            commission: Magnitude::parse(self.commission),
        })
    }
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M") {
        return Some(dt);
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id,name,property,status,submitted_on,last_updated,commission\n";

    #[test]
    fn parses_timestamps_in_several_shapes() {
        let csv = format!(
            "{HEADER}1,Asha,\"2BHK, Baner\",negotiation,2025-09-01,2025-09-03T10:15:00Z,\"₹45,000\"\n\
2,Ravi,Plot,site visit,2025-09-02,2025-09-04 08:30,\n\
3,Meena,Shop,new,2025-09-05,,₹12000\n"
        );
        let leads = parse_leads(csv.as_bytes()).expect("csv parses");
        assert_eq!(leads.len(), 3);
        assert_eq!(leads[0].status, LeadStatus::Negotiation);
        assert_eq!(leads[0].commission.value(), Some(45_000.0));
        assert_eq!(leads[1].status, LeadStatus::SiteVisit);
        assert_eq!(leads[1].commission.value(), None);
        assert_eq!(
            leads[2].last_updated,
            NaiveDate::from_ymd_opt(2025, 9, 5)
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .expect("valid timestamp")
        );
    }

    #[test]
    fn unknown_status_is_rejected_with_row() {
        let csv = format!("{HEADER}1,Asha,Flat,archived,2025-09-01,,\n");
        let err = parse_leads(csv.as_bytes()).expect_err("status rejected");
        match err {
            CatalogLoadError::InvalidRow { row, reason } => {
                assert_eq!(row, 1);
                assert!(reason.contains("archived"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
