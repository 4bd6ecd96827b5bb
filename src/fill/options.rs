// Value shaping for the target widgets: select option labels and the date
// formats the grid editors accept.

use crate::fill::plan::GridColumn;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    static ref COUNTRY_OPTIONS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("TUR", "Turkey (TUR)");
        m.insert("USA", "United States (USA)");
        m.insert("CZE", "Czech Republic (CZE)");
        m.insert("HUN", "Hungary (HUN)");
        m.insert("AUT", "Austria (AUT)");
        m.insert("POL", "Poland (POL)");
        m.insert("CHE", "Switzerland (CHE)");
        m.insert("RUS", "Russia (RUS)");
        m.insert("ROU", "Romania (ROU)");
        m.insert("NLD", "Netherlands (NLD)");
        m
    };

    static ref GENDER_OPTIONS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("M", "Erkek");
        m.insert("MALE", "Erkek");
        m.insert("ERKEK", "Erkek");
        m.insert("F", "Kadın");
        m.insert("FEMALE", "Kadın");
        m.insert("KADIN", "Kadın");
        m.insert("X", "Belirtilmemiş");
        m.insert("OTHER", "Belirtilmemiş");
        m
    };

    // ASCII digits only: the slicing below relies on one byte per digit.
    static ref ISO_DATE: Regex = Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap();
    static ref ISO_DATE_PREFIX: Regex = Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}").unwrap();
    static ref DOTTED_DATE: Regex = Regex::new(r"^([0-9]{1,2})\.([0-9]{1,2})\.([0-9]{4})$").unwrap();
    static ref SLASHED_DATE: Regex = Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})$").unwrap();
    static ref EIGHT_DIGITS: Regex = Regex::new(r"^[0-9]{8}$").unwrap();
    static ref SIX_DIGITS: Regex = Regex::new(r"^[0-9]{6}$").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Map a raw value onto the option label a select widget shows.
/// Unknown values pass through trimmed.
pub fn resolve_select_value(column: GridColumn, raw: &str) -> String {
    let text = raw.trim();
    let upper = text.to_uppercase();
    let table: &HashMap<&str, &str> = match column {
        GridColumn::Nationality => &*COUNTRY_OPTIONS,
        GridColumn::Gender => &*GENDER_OPTIONS,
        _ => return text.to_string(),
    };
    table
        .get(upper.as_str())
        .map(|label| label.to_string())
        .unwrap_or_else(|| text.to_string())
}

fn pad2(part: &str) -> String {
    format!("{:0>2}", part)
}

/// `DD.MM.YYYY` for the cell editors. Unrecognized shapes pass through.
pub fn format_display_date(raw: &str) -> String {
    let text = raw.trim();
    if text.is_empty() {
        return String::new();
    }

    let dotted: Vec<&str> = text.split('.').map(str::trim).collect();
    if dotted.len() == 3 {
        let (d, m, y) = (dotted[0], dotted[1], dotted[2]);
        if d.is_empty() || m.is_empty() || y.is_empty() {
            return text.to_string();
        }
        let year = if y.len() == 2 { format!("20{}", y) } else { y.to_string() };
        return format!("{}.{}.{}", pad2(d), pad2(m), year);
    }

    let compact = WHITESPACE.replace_all(text, "").to_string();
    let (day, month, year) = if compact.contains('-') || compact.contains('/') {
        let sep = if compact.contains('-') { '-' } else { '/' };
        let parts: Vec<&str> = compact.split(sep).collect();
        match parts.as_slice() {
            [y, m, d] if y.len() == 4 => (d.to_string(), m.to_string(), y.to_string()),
            [d, m, y] if y.len() == 4 => (d.to_string(), m.to_string(), y.to_string()),
            _ => return text.to_string(),
        }
    } else if EIGHT_DIGITS.is_match(&compact) {
        if compact.starts_with("19") || compact.starts_with("20") {
            (
                compact[6..8].to_string(),
                compact[4..6].to_string(),
                compact[0..4].to_string(),
            )
        } else {
            (
                compact[4..6].to_string(),
                compact[2..4].to_string(),
                format!("20{}", &compact[0..2]),
            )
        }
    } else if SIX_DIGITS.is_match(&compact) {
        let yy: u32 = compact[0..2].parse().unwrap_or(0);
        let year = if yy < 50 { 2000 + yy } else { 1900 + yy };
        (
            compact[4..6].to_string(),
            compact[2..4].to_string(),
            year.to_string(),
        )
    } else {
        return text.to_string();
    };

    if day.is_empty() || month.is_empty() || year.is_empty() {
        return text.to_string();
    }
    format!("{}.{}.{}", pad2(&day), pad2(&month), year)
}

/// `YYYY-MM-DD` for row-data writes. Unrecognized shapes pass through.
pub fn format_iso_date(raw: &str) -> String {
    let text = raw.trim();
    if text.is_empty() || ISO_DATE.is_match(text) {
        return text.to_string();
    }

    if let Some(caps) = DOTTED_DATE
        .captures(text)
        .or_else(|| SLASHED_DATE.captures(text))
    {
        return format!("{}-{}-{}", &caps[3], pad2(&caps[2]), pad2(&caps[1]));
    }

    if ISO_DATE_PREFIX.is_match(text) {
        return text[..10].to_string();
    }
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_options() {
        assert_eq!(resolve_select_value(GridColumn::Nationality, "tur"), "Turkey (TUR)");
        assert_eq!(resolve_select_value(GridColumn::Nationality, " DEU "), "DEU");
    }

    #[test]
    fn test_gender_options() {
        assert_eq!(resolve_select_value(GridColumn::Gender, "Erkek"), "Erkek");
        assert_eq!(resolve_select_value(GridColumn::Gender, "Kadin"), "Kadın");
        assert_eq!(resolve_select_value(GridColumn::Gender, "x"), "Belirtilmemiş");
        assert_eq!(resolve_select_value(GridColumn::Gender, "Belirtilmedi"), "Belirtilmedi");
    }

    #[test]
    fn test_other_columns_pass_through() {
        assert_eq!(resolve_select_value(GridColumn::Surname, " TUR "), "TUR");
    }

    #[test]
    fn test_display_date_shapes() {
        assert_eq!(format_display_date("1974-08-12"), "12.08.1974");
        assert_eq!(format_display_date("12/8/1974"), "12.08.1974");
        assert_eq!(format_display_date("1.2.24"), "01.02.2024");
        assert_eq!(format_display_date("19740812"), "12.08.1974");
        assert_eq!(format_display_date("740812"), "12.08.1974");
        assert_eq!(format_display_date("300115"), "15.01.2030");
        assert_eq!(format_display_date("12-08-1974"), "12.08.1974");
        assert_eq!(format_display_date(""), "");
        assert_eq!(format_display_date("unknown"), "unknown");
    }

    #[test]
    fn test_iso_date_shapes() {
        assert_eq!(format_iso_date("1974-08-12"), "1974-08-12");
        assert_eq!(format_iso_date("12.8.1974"), "1974-08-12");
        assert_eq!(format_iso_date("2/11/1990"), "1990-11-02");
        assert_eq!(format_iso_date("1974-08-12T00:00:00"), "1974-08-12");
        assert_eq!(format_iso_date("soon"), "soon");
    }

    #[test]
    fn test_non_ascii_digits_pass_through() {
        assert_eq!(format_display_date("१९७४०८१२"), "१९७४०८१२");
        assert_eq!(format_display_date("७४०८१२"), "७४०८१२");
        assert_eq!(format_iso_date("१९७४-०८-१२T"), "१९७४-०८-१२T");
        assert_eq!(format_iso_date("१२.०८.१९७४"), "१२.०८.१९७४");
    }
}
