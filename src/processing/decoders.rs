// Field-level decoders. All of them are total: a malformed field decodes to
// an empty string (or the unspecified gender) and never aborts the parse.

use crate::models::Gender;
use crate::processing::normalizer::FILL_CHAR;

const NAME_SEPARATOR: &str = "<<";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRole {
    Birth,
    Expiry,
}

pub struct FieldDecoder;

impl FieldDecoder {
    /// Drop every fill character and surrounding spaces, e.g. `L898902C<` -> `L898902C`.
    pub fn decode_code(raw: &str) -> String {
        raw.chars()
            .filter(|&c| c != FILL_CHAR)
            .collect::<String>()
            .trim()
            .to_string()
    }

    /// Split a name block into `(surname, given_name)`.
    ///
    /// `<<` separates the primary identifier from the secondary one; single
    /// `<` inside a segment is a word break. Given names are joined with one
    /// space.
    pub fn decode_name(block: &str) -> (String, String) {
        let mut segments = block.split(NAME_SEPARATOR);

        let surname = segments.next().map(Self::spaced_words).unwrap_or_default();
        let given_name = segments
            .map(Self::spaced_words)
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        (surname, given_name)
    }

    fn spaced_words(segment: &str) -> String {
        segment.replace(FILL_CHAR, " ").trim().to_string()
    }

    /// Decode a `YYMMDD` field into `YYYY-MM-DD`, or an empty string when
    /// the field is not exactly six ASCII digits.
    ///
    /// Birth years after the current two-digit year belong to the previous
    /// century. Expiry years are taken as 20YY unless that year is already
    /// more than a year in the past, in which case they roll to 21YY.
    pub fn decode_date(raw: &str, role: DateRole, current_year: i32) -> String {
        if raw.len() != 6 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return String::new();
        }

        let (yy, rest) = raw.split_at(2);
        let (month, day) = rest.split_at(2);
        let two_digit: i32 = yy.bytes().fold(0, |acc, b| acc * 10 + i32::from(b - b'0'));

        let year = match role {
            DateRole::Birth => Self::resolve_birth_century(two_digit, current_year),
            DateRole::Expiry => Self::resolve_expiry_century(two_digit, current_year),
        };

        format!("{}-{}-{}", year, month, day)
    }

    fn resolve_birth_century(two_digit: i32, current_year: i32) -> i32 {
        if two_digit > current_year % 100 {
            1900 + two_digit
        } else {
            2000 + two_digit
        }
    }

    fn resolve_expiry_century(two_digit: i32, current_year: i32) -> i32 {
        let year = 2000 + two_digit;
        if year + 1 < current_year {
            2100 + two_digit
        } else {
            year
        }
    }

    pub fn decode_gender(code: char) -> Gender {
        Gender::from_code(code)
    }
}
