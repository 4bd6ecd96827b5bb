use crate::models::{FieldSpan, MrzDocument, MrzLayout};
use crate::processing::decoders::{DateRole, FieldDecoder};
use crate::processing::normalizer::FILL_CHAR;
use log::debug;

/// Lines of one document, each padded (or cut) to the layout width.
struct PaddedLines {
    lines: Vec<String>,
}

impl PaddedLines {
    fn new<S: AsRef<str>>(lines: &[S], layout: &MrzLayout) -> Self {
        let width = layout.format.mrz_chars_per_line();
        let lines = (0..layout.format.mrz_lines())
            .map(|i| {
                let line = lines.get(i).map(|l| l.as_ref()).unwrap_or("");
                Self::pad(line, width)
            })
            .collect();
        PaddedLines { lines }
    }

    fn pad(line: &str, width: usize) -> String {
        let mut padded: String = line
            .chars()
            .map(|c| if c.is_ascii() { c } else { FILL_CHAR })
            .take(width)
            .collect();
        let missing = width - padded.chars().count();
        padded.extend(std::iter::repeat(FILL_CHAR).take(missing));
        padded
    }

    fn slice(&self, span: &FieldSpan) -> &str {
        // Padded lines are ASCII and exactly full width.
        &self.lines[span.line][span.columns.clone()]
    }

    fn char_at(&self, span: &FieldSpan) -> char {
        self.slice(span).chars().next().unwrap_or(FILL_CHAR)
    }
}

pub struct FieldExtractor;

impl FieldExtractor {
    /// Slice every field out of `lines` according to `layout` and decode it.
    pub fn extract<S: AsRef<str>>(lines: &[S], layout: &MrzLayout, current_year: i32) -> MrzDocument {
        let padded = PaddedLines::new(lines, layout);
        debug!("Extracting {:?} fields from {:?}", layout.format, padded.lines);

        let (surname, given_name) = FieldDecoder::decode_name(padded.slice(&layout.name));
        let gender = FieldDecoder::decode_gender(padded.char_at(&layout.gender));

        MrzDocument {
            document_type: FieldDecoder::decode_code(padded.slice(&layout.document_type)),
            issuing_country: FieldDecoder::decode_code(padded.slice(&layout.issuing_country)),
            surname,
            given_name,
            passport_number: FieldDecoder::decode_code(padded.slice(&layout.document_number)),
            nationality: FieldDecoder::decode_code(padded.slice(&layout.nationality)),
            birth_date: FieldDecoder::decode_date(
                padded.slice(&layout.birth_date),
                DateRole::Birth,
                current_year,
            ),
            gender: gender.label().to_string(),
            expiry_date: FieldDecoder::decode_date(
                padded.slice(&layout.expiry_date),
                DateRole::Expiry,
                current_year,
            ),
            personal_number: FieldDecoder::decode_code(padded.slice(&layout.personal_number)),
        }
    }
}
