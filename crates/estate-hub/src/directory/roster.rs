use super::domain::Provider;
use crate::catalog::{Magnitude, Rating};

/// Built-in provider roster served when no CSV export is configured.
pub(crate) fn standard_providers() -> Vec<Provider> {
    vec![
        Provider {
            id: 1,
            name: "Adv. Meera Kulkarni".to_string(),
            profession: "Property Lawyer".to_string(),
            location: "Kothrud, Pune".to_string(),
            rating: Rating::from(4.9),
            reviews: 214,
            price: Magnitude::parse("₹7438"),
            experience: Magnitude::parse("12+ years"),
            specialties: tags(&["Title Verification", "Sale Deeds", "RERA Disputes"]),
            languages: tags(&["English", "Marathi", "Hindi"]),
            verified: true,
            available: true,
        },
        Provider {
            id: 2,
            name: "Sharma Legal Associates".to_string(),
            profession: "Property Lawyer".to_string(),
            location: "Andheri West, Mumbai".to_string(),
            rating: Rating::from("4.7"),
            reviews: 156,
            price: Magnitude::parse("₹5,500"),
            experience: Magnitude::parse("9+ years"),
            specialties: tags(&["Property Registration", "Lease Agreements"]),
            languages: tags(&["English", "Hindi"]),
            verified: true,
            available: false,
        },
        Provider {
            id: 3,
            name: "Adv. Rohan Iyer".to_string(),
            profession: "Senior Property Lawyer".to_string(),
            location: "Indiranagar, Bengaluru".to_string(),
            rating: Rating::from(4.6),
            reviews: 98,
            price: Magnitude::parse("₹9,200"),
            experience: Magnitude::parse("15+ years"),
            specialties: tags(&["Litigation", "Builder Disputes", "Inheritance"]),
            languages: tags(&["English", "Kannada", "Tamil"]),
            verified: false,
            available: true,
        },
        Provider {
            id: 4,
            name: "ColorCraft Painters".to_string(),
            profession: "Painter".to_string(),
            location: "Baner, Pune".to_string(),
            rating: Rating::from(4.5),
            reviews: 321,
            price: Magnitude::parse("₹27 per sq.ft"),
            experience: Magnitude::parse("8+ years"),
            specialties: tags(&["Texture Painting", "Waterproofing"]),
            languages: tags(&["Marathi", "Hindi"]),
            verified: true,
            available: true,
        },
        Provider {
            id: 5,
            name: "Brush & Roller Co".to_string(),
            profession: "Painter".to_string(),
            location: "Thane West, Mumbai".to_string(),
            rating: Rating::from(4.8),
            reviews: 187,
            price: Magnitude::parse("₹18 per sq.ft"),
            experience: Magnitude::parse("6+ years"),
            specialties: tags(&["Interior Painting", "Wall Stencils"]),
            languages: tags(&["Hindi", "English"]),
            verified: true,
            available: true,
        },
        Provider {
            id: 6,
            name: "Budget Home Painters".to_string(),
            profession: "Painter".to_string(),
            location: "Whitefield, Bengaluru".to_string(),
            rating: Rating::from("4.1"),
            reviews: 64,
            price: Magnitude::parse("₹9 per sq.ft"),
            experience: Magnitude::parse("3+ years"),
            specialties: tags(&["Exterior Painting"]),
            languages: tags(&["Kannada", "English"]),
            verified: false,
            available: true,
        },
        Provider {
            id: 7,
            name: "Spark Electricals".to_string(),
            profession: "Electrician".to_string(),
            location: "Hadapsar, Pune".to_string(),
            rating: Rating::from(4.4),
            reviews: 142,
            price: Magnitude::parse("₹350 per visit"),
            experience: Magnitude::parse("7+ years"),
            specialties: tags(&["Wiring", "Inverter Setup"]),
            languages: tags(&["Marathi", "Hindi"]),
            verified: true,
            available: true,
        },
        Provider {
            id: 8,
            name: "Volt Masters".to_string(),
            profession: "Electrician".to_string(),
            location: "Powai, Mumbai".to_string(),
            rating: Rating::from("new"),
            reviews: 0,
            price: Magnitude::parse("₹400 per visit"),
            experience: Magnitude::parse("2+ years"),
            specialties: tags(&["Smart Switches"]),
            languages: tags(&["Hindi"]),
            verified: false,
            available: true,
        },
        Provider {
            id: 9,
            name: "FlowFix Plumbing".to_string(),
            profession: "Plumber".to_string(),
            location: "Wakad, Pune".to_string(),
            rating: Rating::from(4.3),
            reviews: 88,
            price: Magnitude::parse("₹300 per visit"),
            experience: Magnitude::parse("5+ years"),
            specialties: tags(&["Leak Repair", "Bathroom Fittings"]),
            languages: tags(&["Marathi"]),
            verified: true,
            available: false,
        },
        Provider {
            id: 10,
            name: "Urban Nest Interiors".to_string(),
            profession: "Interior Designer".to_string(),
            location: "Koregaon Park, Pune".to_string(),
            rating: Rating::from(4.9),
            reviews: 276,
            price: Magnitude::parse("₹1,250 per sq.ft"),
            experience: Magnitude::parse("11+ years"),
            specialties: tags(&["Modular Kitchens", "Space Planning"]),
            languages: tags(&["English", "Marathi"]),
            verified: true,
            available: true,
        },
        Provider {
            id: 11,
            name: "Design Aangan".to_string(),
            profession: "Interior Decorator".to_string(),
            location: "Jayanagar, Bengaluru".to_string(),
            rating: Rating::from(4.2),
            reviews: 73,
            price: Magnitude::parse("₹850 per sq.ft"),
            experience: Magnitude::parse("4+ years"),
            specialties: tags(&["Vastu Layouts", "Furnishing"]),
            languages: tags(&["Kannada", "Hindi"]),
            verified: false,
            available: true,
        },
        Provider {
            id: 12,
            name: "SafeShift Packers & Movers".to_string(),
            profession: "Packers & Movers".to_string(),
            location: "Navi Mumbai".to_string(),
            rating: Rating::from(4.6),
            reviews: 402,
            price: Magnitude::parse("₹12,000 onwards"),
            experience: Magnitude::parse("10+ years"),
            specialties: tags(&["Intercity Moves", "Vehicle Transport"]),
            languages: tags(&["Hindi", "English", "Marathi"]),
            verified: true,
            available: true,
        },
        Provider {
            id: 13,
            name: "InspectRight".to_string(),
            profession: "Home Inspector".to_string(),
            location: "Kharadi, Pune".to_string(),
            rating: Rating::from(4.7),
            reviews: 119,
            price: Magnitude::parse("₹4,999"),
            experience: Magnitude::parse("8+ years"),
            specialties: tags(&["Pre-purchase Inspection", "Seepage Audit"]),
            languages: tags(&["English", "Hindi"]),
            verified: true,
            available: true,
        },
        Provider {
            id: 14,
            name: "Timber Works".to_string(),
            profession: "Carpenter".to_string(),
            location: "Borivali, Mumbai".to_string(),
            rating: Rating::from(4.0),
            reviews: 58,
            price: Magnitude::parse("₹650 per day"),
            experience: Magnitude::parse("14+ years"),
            specialties: tags(&["Wardrobes", "Door Repair"]),
            languages: tags(&["Hindi", "Gujarati"]),
            verified: false,
            available: false,
        },
        Provider {
            id: 15,
            name: "Sparkle Deep Cleaning".to_string(),
            profession: "Cleaning Services".to_string(),
            location: "Hinjewadi, Pune".to_string(),
            rating: Rating::from(4.5),
            reviews: 233,
            price: Magnitude::parse("₹3,200 per home"),
            experience: Magnitude::parse("5+ years"),
            specialties: tags(&["Move-in Cleaning", "Sofa Shampoo"]),
            languages: tags(&["Marathi", "Hindi"]),
            verified: true,
            available: true,
        },
        Provider {
            id: 16,
            name: "Adv. Farah Khan".to_string(),
            profession: "Property Lawyer".to_string(),
            location: "Bandra West, Mumbai".to_string(),
            rating: Rating::from(4.8),
            reviews: 301,
            price: Magnitude::parse("Consultation on request"),
            experience: Magnitude::parse("18+ years"),
            specialties: tags(&["NRI Property", "Power of Attorney"]),
            languages: tags(&["English", "Hindi", "Urdu"]),
            verified: true,
            available: true,
        },
    ]
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
