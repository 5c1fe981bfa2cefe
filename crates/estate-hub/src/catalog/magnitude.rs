use serde::Serialize;

/// A display string (`"₹7,438"`, `"9+ years"`, `"₹18 per sq.ft"`) paired with
/// the numeric magnitude extracted from it once, at load time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Magnitude {
    display: String,
    value: Option<f64>,
}

impl Magnitude {
    pub fn parse(display: impl Into<String>) -> Self {
        let display = display.into();
        let value = extract_magnitude(&display);
        Self { display, value }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// `None` when the display string carries no digits.
    pub fn value(&self) -> Option<f64> {
        self.value
    }
}

impl From<&str> for Magnitude {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

/// Provider rating. Source data mixes numbers, numeric strings, and display
/// forms such as `"4.5/5"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Rating(Option<f64>);

impl Rating {
    pub fn parse(raw: &str) -> Self {
        Self(extract_magnitude(raw).filter(|value| value.is_finite()))
    }

    pub fn value(self) -> Option<f64> {
        self.0
    }
}

impl From<f64> for Rating {
    fn from(value: f64) -> Self {
        Self(Some(value).filter(|value| value.is_finite()))
    }
}

impl From<&str> for Rating {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

/// Reads the first run of digits, skipping currency symbols before it, thousands
/// separators inside it, and any unit suffix after it.
pub(crate) fn extract_magnitude(raw: &str) -> Option<f64> {
    let mut digits = String::new();
    let mut seen_point = false;

    for ch in raw.chars() {
        match ch {
            '0'..='9' => digits.push(ch),
            ',' if !digits.is_empty() => {}
            '.' if !digits.is_empty() && !seen_point => {
                seen_point = true;
                digits.push('.');
            }
            _ if !digits.is_empty() => break,
            _ => {}
        }
    }

    if digits.is_empty() {
        return None;
    }

    digits.trim_end_matches('.').parse().ok()
}
