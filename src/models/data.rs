use serde::{Deserialize, Serialize};
use std::fmt;

/// MRZ line geometry. Only the two layouts a wedge scanner emits are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentFormat {
    TD1, // ID Card (85.6mm × 54.0mm)
    TD3, // Passport (125.0mm × 88.0mm)
}

impl DocumentFormat {
    pub fn mrz_lines(&self) -> usize {
        match self {
            DocumentFormat::TD1 => 3,
            DocumentFormat::TD3 => 2,
        }
    }

    pub fn mrz_chars_per_line(&self) -> usize {
        match self {
            DocumentFormat::TD1 => 30,
            DocumentFormat::TD3 => 44,
        }
    }

    /// Length of the whole zone with the line breaks removed.
    pub fn total_chars(&self) -> usize {
        self.mrz_lines() * self.mrz_chars_per_line()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentKind {
    Passport,
    IdCard,
}

impl DocumentKind {
    pub fn format(&self) -> DocumentFormat {
        match self {
            DocumentKind::Passport => DocumentFormat::TD3,
            DocumentKind::IdCard => DocumentFormat::TD1,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DocumentKind::Passport => write!(f, "PASSPORT"),
            DocumentKind::IdCard => write!(f, "ID_CARD"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Unspecified,
}

impl Gender {
    pub const MALE_LABEL: &'static str = "Erkek";
    pub const FEMALE_LABEL: &'static str = "Kadin";
    pub const UNSPECIFIED_LABEL: &'static str = "Belirtilmedi";

    /// Only `M` and `F` are recognized; the fill character and anything
    /// else is unspecified.
    pub fn from_code(code: char) -> Self {
        match code {
            'M' => Gender::Male,
            'F' => Gender::Female,
            _ => Gender::Unspecified,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => Self::MALE_LABEL,
            Gender::Female => Self::FEMALE_LABEL,
            Gender::Unspecified => Self::UNSPECIFIED_LABEL,
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            Self::MALE_LABEL => Gender::Male,
            Self::FEMALE_LABEL => Gender::Female,
            _ => Gender::Unspecified,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Decoded MRZ record handed to the fill stage.
///
/// Every field is always present. Missing or malformed source data shows up
/// as an empty string, except `gender` which falls back to the unspecified
/// label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MrzDocument {
    pub document_type: String,
    pub issuing_country: String,
    pub surname: String,
    pub given_name: String,
    pub passport_number: String,
    pub nationality: String,
    pub birth_date: String,
    pub gender: String,
    pub expiry_date: String,
    pub personal_number: String,
}

impl MrzDocument {
    pub fn is_passport(&self) -> bool {
        self.document_type == "P"
    }

    pub fn gender_kind(&self) -> Gender {
        Gender::from_label(&self.gender)
    }

    /// Labelled fields in display order.
    pub fn fields(&self) -> [(&'static str, &str); 10] {
        [
            ("Document Type", self.document_type.as_str()),
            ("Issuing Country", self.issuing_country.as_str()),
            ("Surname", self.surname.as_str()),
            ("Given Name", self.given_name.as_str()),
            ("Passport Number", self.passport_number.as_str()),
            ("Nationality", self.nationality.as_str()),
            ("Birth Date", self.birth_date.as_str()),
            ("Gender", self.gender.as_str()),
            ("Expiry Date", self.expiry_date.as_str()),
            ("Personal Number", self.personal_number.as_str()),
        ]
    }
}
