pub mod data;
pub mod layout;

pub use data::{DocumentFormat, DocumentKind, Gender, MrzDocument};
pub use layout::{FieldSpan, MrzLayout, ID_CARD_LAYOUT, PASSPORT_LAYOUT};
