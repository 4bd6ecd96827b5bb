use crate::models::DocumentFormat;
use std::ops::Range;

/// Position of a field inside the zone: line index plus a column range
/// (0-based, end-exclusive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpan {
    pub line: usize,
    pub columns: Range<usize>,
}

impl FieldSpan {
    const fn new(line: usize, start: usize, end: usize) -> Self {
        FieldSpan {
            line,
            columns: start..end,
        }
    }

    const fn at(line: usize, column: usize) -> Self {
        Self::new(line, column, column + 1)
    }
}

/// Field table for one MRZ layout.
#[derive(Debug, Clone)]
pub struct MrzLayout {
    pub format: DocumentFormat,
    pub document_type: FieldSpan,
    pub issuing_country: FieldSpan,
    pub name: FieldSpan,
    pub document_number: FieldSpan,
    pub nationality: FieldSpan,
    pub birth_date: FieldSpan,
    pub gender: FieldSpan,
    pub expiry_date: FieldSpan,
    pub personal_number: FieldSpan,
}

// TD3: two lines of 44
pub static PASSPORT_LAYOUT: MrzLayout = MrzLayout {
    format: DocumentFormat::TD3,
    document_type: FieldSpan::new(0, 0, 2),
    issuing_country: FieldSpan::new(0, 2, 5),
    name: FieldSpan::new(0, 5, 44),
    document_number: FieldSpan::new(1, 0, 9),
    nationality: FieldSpan::new(1, 10, 13),
    birth_date: FieldSpan::new(1, 13, 19),
    gender: FieldSpan::at(1, 20),
    expiry_date: FieldSpan::new(1, 21, 27),
    personal_number: FieldSpan::new(1, 28, 42),
};

// TD1: three lines of 30, the name owns the whole third line
pub static ID_CARD_LAYOUT: MrzLayout = MrzLayout {
    format: DocumentFormat::TD1,
    document_type: FieldSpan::new(0, 0, 1),
    issuing_country: FieldSpan::new(0, 2, 5),
    document_number: FieldSpan::new(0, 5, 14),
    personal_number: FieldSpan::new(0, 15, 30),
    birth_date: FieldSpan::new(1, 0, 6),
    gender: FieldSpan::at(1, 7),
    expiry_date: FieldSpan::new(1, 8, 14),
    nationality: FieldSpan::new(1, 15, 18),
    name: FieldSpan::new(2, 0, 30),
};

impl MrzLayout {
    pub fn for_format(format: DocumentFormat) -> &'static MrzLayout {
        match format {
            DocumentFormat::TD1 => &ID_CARD_LAYOUT,
            DocumentFormat::TD3 => &PASSPORT_LAYOUT,
        }
    }
}
