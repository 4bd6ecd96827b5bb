use crate::models::DocumentKind;

// Sits between the TD1 width (30) and the TD3 width (44) so a slightly
// garbled first line still lands on the right side.
const ID_CARD_MAX_FIRST_LINE: usize = 35;
const ID_CARD_LINE_COUNT: usize = 3;

pub struct DocumentClassifier;

impl DocumentClassifier {
    pub fn classify<S: AsRef<str>>(lines: &[S]) -> DocumentKind {
        if lines.len() >= ID_CARD_LINE_COUNT {
            return DocumentKind::IdCard;
        }

        let first_len = lines.first().map(|line| line.as_ref().len()).unwrap_or(0);
        if first_len <= ID_CARD_MAX_FIRST_LINE {
            DocumentKind::IdCard
        } else {
            DocumentKind::Passport
        }
    }
}
