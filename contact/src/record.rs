//! The contact record sent to the backend.
//!
//! Field names and enumeration literals are the wire format: the backend
//! receives exactly `{"first_name": .., "country": "USA", "company_size": "1000+", ..}`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raised when an enumeration field receives a value outside its option set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{value}` is not one of the allowed options")]
pub struct UnknownOption {
    /// The rejected raw value.
    pub value: String,
}

/// Country of the person contacting sales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Country {
    /// India
    #[default]
    India,
    /// United States of America
    #[serde(rename = "USA")]
    Usa,
}

impl Country {
    /// Every option, in the order the select shows them.
    pub const ALL: [Country; 2] = [Country::India, Country::Usa];

    /// Literal value on the wire and in the `<option value>`.
    pub fn as_str(self) -> &'static str {
        match self {
            Country::India => "India",
            Country::Usa => "USA",
        }
    }

    /// Human label shown in the select.
    pub fn label(self) -> &'static str {
        match self {
            Country::India => "India",
            Country::Usa => "United States of America",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Country {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownOption { value: s.to_string() })
    }
}

/// Headcount bracket of the prospect's company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CompanySize {
    /// 1-10 employees
    #[default]
    #[serde(rename = "1-10")]
    Micro,
    /// 11-50 employees
    #[serde(rename = "11-50")]
    Small,
    /// 51-200 employees
    #[serde(rename = "51-200")]
    Medium,
    /// 201-500 employees
    #[serde(rename = "201-500")]
    Large,
    /// 501-1000 employees
    #[serde(rename = "501-1000")]
    XLarge,
    /// More than 1000 employees
    #[serde(rename = "1000+")]
    Enterprise,
}

impl CompanySize {
    /// Every option, smallest first.
    pub const ALL: [CompanySize; 6] = [
        CompanySize::Micro,
        CompanySize::Small,
        CompanySize::Medium,
        CompanySize::Large,
        CompanySize::XLarge,
        CompanySize::Enterprise,
    ];

    /// Literal value on the wire. Doubles as the select label.
    pub fn as_str(self) -> &'static str {
        match self {
            CompanySize::Micro => "1-10",
            CompanySize::Small => "11-50",
            CompanySize::Medium => "51-200",
            CompanySize::Large => "201-500",
            CompanySize::XLarge => "501-1000",
            CompanySize::Enterprise => "1000+",
        }
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompanySize {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompanySize::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownOption { value: s.to_string() })
    }
}

/// A validated contact request.
///
/// Built by [`ContactDraft::validate`](crate::ContactDraft::validate); the
/// serialized form is the POST body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Well-formed email address
    pub email: String,
    /// Phone number, free format
    pub phone_number: String,
    /// Country
    pub country: Country,
    /// Company headcount bracket
    pub company_size: CompanySize,
    /// Message body, may be empty
    pub info: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> ContactRecord {
        ContactRecord {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            email: "grace@navy.mil".into(),
            phone_number: "+1 202 555 0199".into(),
            country: Country::Usa,
            company_size: CompanySize::Enterprise,
            info: "We need a roadmap tool".into(),
        }
    }

    #[test]
    fn record_serializes_with_wire_names_and_literals() {
        let value = serde_json::to_value(sample()).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "first_name": "Grace",
                "last_name": "Hopper",
                "email": "grace@navy.mil",
                "phone_number": "+1 202 555 0199",
                "country": "USA",
                "company_size": "1000+",
                "info": "We need a roadmap tool",
            })
        );
    }

    #[test]
    fn deserialize_rejects_unknown_country() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value["country"] = "Canada".into();

        assert!(serde_json::from_value::<ContactRecord>(value).is_err());
    }

    #[test]
    fn parse_accepts_only_literals() {
        assert_eq!("USA".parse::<Country>(), Ok(Country::Usa));
        assert_eq!("India".parse::<Country>(), Ok(Country::India));
        assert!("usa".parse::<Country>().is_err());
        assert!("United States of America".parse::<Country>().is_err());

        for size in CompanySize::ALL {
            assert_eq!(size.as_str().parse::<CompanySize>(), Ok(size));
        }
        assert!("1000".parse::<CompanySize>().is_err());
        assert!("2-10".parse::<CompanySize>().is_err());
        assert!("".parse::<CompanySize>().is_err());
    }

    #[test]
    fn unknown_option_keeps_the_value() {
        let err = "Mars".parse::<Country>().unwrap_err();
        assert_eq!(err.value, "Mars");
        assert_eq!(err.to_string(), "`Mars` is not one of the allowed options");
    }

    #[test]
    fn country_labels_differ_from_literals() {
        assert_eq!(Country::Usa.label(), "United States of America");
        assert_eq!(Country::Usa.to_string(), "USA");
    }
}
