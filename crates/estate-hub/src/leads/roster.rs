use super::domain::{Lead, LeadStatus};
use crate::catalog::Magnitude;
use chrono::{NaiveDate, NaiveDateTime};

/// Built-in partner lead list served when no CSV export is configured.
pub(crate) fn standard_leads() -> Vec<Lead> {
    vec![
        lead(
            101,
            "Ananya Deshmukh",
            "3BHK, Baner Heights, Pune",
            LeadStatus::Negotiation,
            (2025, 8, 4),
            (2025, 9, 18, 16, 30),
            "₹45,000",
        ),
        lead(
            102,
            "Rahul Verma",
            "2BHK, Powai Lakeside, Mumbai",
            LeadStatus::New,
            (2025, 9, 15),
            (2025, 9, 15, 10, 5),
            "₹38,000",
        ),
        lead(
            103,
            "Sneha Pillai",
            "Villa Plot, Sarjapur Road, Bengaluru",
            LeadStatus::SiteVisit,
            (2025, 7, 22),
            (2025, 9, 10, 12, 0),
            "₹1,20,000",
        ),
        lead(
            104,
            "Imran Sheikh",
            "Office Space, Hinjewadi, Pune",
            LeadStatus::Closed,
            (2025, 6, 3),
            (2025, 8, 29, 18, 45),
            "₹85,000",
        ),
        lead(
            105,
            "Kavita Joshi",
            "1BHK, Thane West, Mumbai",
            LeadStatus::Contacted,
            (2025, 9, 1),
            (2025, 9, 12, 9, 20),
            "₹22,500",
        ),
        lead(
            106,
            "Arjun Nair",
            "2BHK, Whitefield, Bengaluru",
            LeadStatus::Lost,
            (2025, 5, 19),
            (2025, 7, 2, 11, 10),
            "₹30,000",
        ),
        lead(
            107,
            "Pooja Bansal",
            "4BHK Penthouse, Koregaon Park, Pune",
            LeadStatus::Negotiation,
            (2025, 8, 27),
            (2025, 9, 17, 15, 0),
            "Pending valuation",
        ),
        lead(
            108,
            "Vikram Rao",
            "Shop, Jayanagar, Bengaluru",
            LeadStatus::Closed,
            (2025, 4, 11),
            (2025, 6, 20, 14, 15),
            "₹45,000",
        ),
    ]
}

fn lead(
    id: u32,
    name: &str,
    property: &str,
    status: LeadStatus,
    submitted: (i32, u32, u32),
    updated: (i32, u32, u32, u32, u32),
    commission: &str,
) -> Lead {
    Lead {
        id,
        name: name.to_string(),
        property: property.to_string(),
        status,
        submitted_on: day(submitted.0, submitted.1, submitted.2),
        last_updated: moment(updated),
        commission: Magnitude::parse(commission),
    }
}

fn day(year: i32, month: u32, date: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, date).unwrap_or_default()
}

fn moment((year, month, date, hour, minute): (i32, u32, u32, u32, u32)) -> NaiveDateTime {
    day(year, month, date)
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_default()
}
