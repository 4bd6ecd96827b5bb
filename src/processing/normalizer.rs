use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_MRZ_CHARS: Regex = Regex::new(r"[^A-Z0-9<\n]").unwrap();
    static ref NEWLINE_RUNS: Regex = Regex::new(r"\n{2,}").unwrap();
}

pub const FILL_CHAR: char = '<';

// Some wedge scanners report the fill character as "A-".
const SCANNER_FILL_MISREAD: &str = "A-";

pub struct MrzNormalizer;

impl MrzNormalizer {
    /// Clean raw scanner or clipboard text into an MRZ character stream
    /// (`A-Z`, `0-9`, `<`, single newlines). Never fails; garbage input
    /// just yields fewer or shorter lines.
    pub fn normalize(raw: &str) -> String {
        let upper = raw.trim().to_uppercase();
        let replaced = upper.replace(SCANNER_FILL_MISREAD, "<");
        let stripped = NON_MRZ_CHARS.replace_all(&replaced, "");
        let collapsed = NEWLINE_RUNS.replace_all(&stripped, "\n");

        // Stripping can leave a newline at either end.
        collapsed.trim_matches('\n').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercases_and_strips() {
        let normalized = MrzNormalizer::normalize("  p<utoeriksson<<anna maria  ");
        assert_eq!(normalized, "P<UTOERIKSSON<<ANNAMARIA");
    }

    #[test]
    fn test_scanner_misread_becomes_fill() {
        assert_eq!(MrzNormalizer::normalize("P<TURA-A-SMITH"), "P<TUR<<SMITH");
    }

    #[test]
    fn test_collapses_blank_lines() {
        let normalized = MrzNormalizer::normalize("LINE1\r\n\r\n\n\nLINE2\n\n");
        assert_eq!(normalized, "LINE1\nLINE2");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "   ",
            "ABC\n-",
            "a-b\n\n\nc<<d",
            "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<\nL898902C36UTO7408122F1204159ZE184226B<<<<<10",
            "\n\n-\nx y z\t\n",
            "ßtraße-ä\n\nÖ",
        ];
        for sample in samples {
            let once = MrzNormalizer::normalize(sample);
            assert_eq!(MrzNormalizer::normalize(&once), once, "input {:?}", sample);
        }
    }

    #[test]
    fn test_only_mrz_alphabet_survives() {
        let normalized = MrzNormalizer::normalize("é!@#12ab<\n");
        assert!(normalized
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == FILL_CHAR || c == '\n'));
    }
}
