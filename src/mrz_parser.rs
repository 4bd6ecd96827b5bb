use crate::config::ParserConfig;
use crate::models::*;
use crate::processing::*;
use crate::utils::MrzError;
use chrono::{Datelike, Local};
use log::debug;

pub struct MrzParser {
    reference_year: Option<i32>,
}

impl MrzParser {
    pub fn new() -> Self {
        MrzParser {
            reference_year: None,
        }
    }

    /// Resolve two-digit years against a fixed year instead of the clock.
    pub fn with_reference_year(year: i32) -> Self {
        MrzParser {
            reference_year: Some(year),
        }
    }

    pub fn from_config(config: &ParserConfig) -> Self {
        MrzParser {
            reference_year: config.reference_year,
        }
    }

    fn current_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(|| Local::now().year())
    }

    // Main parse function that orchestrates the entire pipeline
    pub fn parse(&self, raw: &str) -> Result<MrzDocument, MrzError> {
        // Step 1: Clean up the scanner text
        let normalized = MrzNormalizer::normalize(raw);

        // Step 2: Split into lines, the only stage that can fail
        let lines = LineSegmenter::segment(&normalized)?;

        // Step 3: Pick the layout
        let kind = DocumentClassifier::classify(&lines);
        debug!("Classified {} MRZ line(s) as {}", lines.len(), kind);

        // Step 4: Slice and decode every field
        let layout = MrzLayout::for_format(kind.format());
        Ok(FieldExtractor::extract(&lines, layout, self.current_year()))
    }

    pub fn classify(&self, raw: &str) -> Result<DocumentKind, MrzError> {
        let lines = LineSegmenter::segment(&MrzNormalizer::normalize(raw))?;
        Ok(DocumentClassifier::classify(&lines))
    }
}

impl Default for MrzParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse with the local clock year.
pub fn parse_mrz(raw: &str) -> Result<MrzDocument, MrzError> {
    MrzParser::new().parse(raw)
}
