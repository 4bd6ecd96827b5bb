// Scanner and clipboard input capture
pub mod session;

pub use session::{process_scan, Key, KeyEvent, ScanOutcome, ScanSession, ScanStatus};
