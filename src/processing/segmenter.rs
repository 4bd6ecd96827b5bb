use crate::models::DocumentFormat;
use crate::utils::MrzError;
use log::debug;

const MIN_LINE_COUNT: usize = 2;

pub struct LineSegmenter;

impl LineSegmenter {
    /// Split normalized MRZ text into its non-empty lines.
    ///
    /// When the scanner emitted the zone as one continuous run, the text is
    /// re-split by total length: 88..90 characters become two passport lines
    /// of 44, 90 or more become three ID card lines of 30.
    pub fn segment(normalized: &str) -> Result<Vec<String>, MrzError> {
        let lines: Vec<String> = normalized
            .split('\n')
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        if lines.len() >= MIN_LINE_COUNT {
            return Ok(lines);
        }

        let compact: Vec<char> = normalized.chars().filter(|&c| c != '\n').collect();
        debug!(
            "Only {} MRZ line(s) found, re-splitting {} characters by width",
            lines.len(),
            compact.len()
        );
        Self::split_fixed_width(&compact)
    }

    fn split_fixed_width(compact: &[char]) -> Result<Vec<String>, MrzError> {
        let passport = DocumentFormat::TD3;
        let id_card = DocumentFormat::TD1;
        let length = compact.len();

        let format = if length >= passport.total_chars() && length < id_card.total_chars() {
            passport
        } else if length >= id_card.total_chars() {
            id_card
        } else {
            return Err(MrzError::InvalidMrz(
                "MRZ must contain at least two lines.".to_string(),
            ));
        };

        let width = format.mrz_chars_per_line();
        Ok(compact
            .chunks(width)
            .take(format.mrz_lines())
            .map(|chunk| chunk.iter().collect())
            .collect())
    }
}
