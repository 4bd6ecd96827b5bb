use crate::config::CaptureConfig;
use crate::models::MrzDocument;
use crate::mrz_parser::MrzParser;
use crate::utils::MrzError;
use log::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub timestamp_ms: u64,
    /// Ctrl, Alt or Meta held down.
    pub modifier: bool,
}

impl KeyEvent {
    pub fn new(key: Key, timestamp_ms: u64) -> Self {
        KeyEvent {
            key,
            timestamp_ms,
            modifier: false,
        }
    }
}

/// Keystroke accumulator for one focused input.
///
/// Scanners type much faster than people: keys arriving more than
/// `gap_threshold_ms` apart reset the buffer. The caller drives the
/// finalize timer through [`ScanSession::poll`].
#[derive(Debug, Clone)]
pub struct ScanSession {
    config: CaptureConfig,
    buffer: String,
    last_key_ms: Option<u64>,
    deadline_ms: Option<u64>,
}

impl ScanSession {
    pub fn new(config: CaptureConfig) -> Self {
        ScanSession {
            config,
            buffer: String::new(),
            last_key_ms: None,
            deadline_ms: None,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
        self.last_key_ms = None;
        self.deadline_ms = None;
    }

    /// Feed one key. Returns the buffered scan when Enter completes it.
    pub fn handle_key(&mut self, event: KeyEvent) -> Option<String> {
        if event.modifier {
            return None;
        }

        if let Some(last) = self.last_key_ms {
            if event.timestamp_ms.saturating_sub(last) > self.config.gap_threshold_ms {
                debug!("Key gap over {}ms, dropping buffer", self.config.gap_threshold_ms);
                self.reset();
            }
        }
        self.last_key_ms = Some(event.timestamp_ms);

        match event.key {
            Key::Enter => {
                // First Enter ends MRZ line one.
                if !self.buffer.contains('\n') {
                    self.buffer.push('\n');
                    return None;
                }
                self.finalize()
            }
            Key::Char(c) => {
                self.buffer.push(c);
                self.deadline_ms = Some(
                    event
                        .timestamp_ms
                        .saturating_add(self.config.finalize_delay_ms),
                );
                None
            }
            Key::Other => None,
        }
    }

    /// Run the finalize timer. Returns the scan if the deadline passed and
    /// enough characters were buffered.
    pub fn poll(&mut self, now_ms: u64) -> Option<String> {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => self.finalize(),
            _ => None,
        }
    }

    /// Clipboard input. Pastes into form fields belong to the user.
    pub fn accept_paste(&self, text: &str, target_is_form_field: bool) -> Option<String> {
        if target_is_form_field {
            return None;
        }
        if text.chars().count() >= self.config.min_scan_length {
            Some(text.to_string())
        } else {
            None
        }
    }

    fn finalize(&mut self) -> Option<String> {
        let scan = if self.buffer.chars().count() >= self.config.min_scan_length {
            Some(std::mem::take(&mut self.buffer))
        } else {
            None
        };
        self.reset();
        scan
    }
}

/// State of a raw buffer before a parse is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStatus {
    Empty,
    Waiting,
    Ready,
}

impl ScanStatus {
    pub fn of(raw: &str, config: &CaptureConfig) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            ScanStatus::Empty
        } else if trimmed.chars().count() < config.min_scan_length {
            ScanStatus::Waiting
        } else {
            ScanStatus::Ready
        }
    }
}

#[derive(Debug)]
pub enum ScanOutcome {
    Parsed(MrzDocument),
    /// Not a usable scan yet; wait for more input.
    Incomplete(MrzError),
}

pub fn process_scan(raw: &str, parser: &MrzParser) -> ScanOutcome {
    match parser.parse(raw) {
        Ok(document) => {
            info!(
                "Parsed {} document {} for {} {}",
                document.document_type,
                document.passport_number,
                document.given_name,
                document.surname
            );
            ScanOutcome::Parsed(document)
        }
        Err(err) => {
            warn!("Ignoring scan of {} chars: {}", raw.len(), err);
            ScanOutcome::Incomplete(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(session: &mut ScanSession, text: &str, start_ms: u64) -> (u64, Option<String>) {
        let mut now = start_ms;
        let mut emitted = None;
        for c in text.chars() {
            let key = if c == '\n' { Key::Enter } else { Key::Char(c) };
            if let Some(scan) = session.handle_key(KeyEvent::new(key, now)) {
                emitted = Some(scan);
            }
            now += 5;
        }
        (now, emitted)
    }

    #[test]
    fn test_enter_twice_completes_scan() {
        let mut session = ScanSession::new(CaptureConfig::default());
        let line1 = "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<";
        let line2 = "L898902C36UTO7408122F1204159ZE184226B<<<<<10";
        let (_, emitted) = type_text(&mut session, &format!("{}\n{}\n", line1, line2), 0);
        assert_eq!(emitted, Some(format!("{}\n{}", line1, line2)));
        assert_eq!(session.buffer(), "");
    }

    #[test]
    fn test_slow_typing_resets_buffer() {
        let mut session = ScanSession::new(CaptureConfig::default());
        session.handle_key(KeyEvent::new(Key::Char('A'), 0));
        session.handle_key(KeyEvent::new(Key::Char('B'), 500));
        assert_eq!(session.buffer(), "B");
    }

    #[test]
    fn test_modifier_keys_ignored() {
        let mut session = ScanSession::new(CaptureConfig::default());
        let mut event = KeyEvent::new(Key::Char('V'), 0);
        event.modifier = true;
        assert_eq!(session.handle_key(event), None);
        assert_eq!(session.buffer(), "");
    }

    #[test]
    fn test_poll_finalizes_after_delay() {
        let mut session = ScanSession::new(CaptureConfig::default());
        let run = "X".repeat(40);
        let (end, _) = type_text(&mut session, &run, 1_000);
        let last_key = end - 5;
        assert_eq!(session.poll(last_key + 10), None);
        assert_eq!(session.poll(last_key + 60), Some(run));
        assert_eq!(session.poll(last_key + 200), None);
    }

    #[test]
    fn test_short_buffer_is_dropped() {
        let mut session = ScanSession::new(CaptureConfig::default());
        let (end, _) = type_text(&mut session, "SHORT", 0);
        assert_eq!(session.poll(end + 100), None);
        assert_eq!(session.buffer(), "");
    }

    #[test]
    fn test_short_buffer_dropped_on_second_enter() {
        let mut session = ScanSession::new(CaptureConfig::default());
        let (_, emitted) = type_text(&mut session, "ABC\nDEF\n", 0);
        assert_eq!(emitted, None);
        assert_eq!(session.buffer(), "");
    }

    #[test]
    fn test_paste_gate() {
        let session = ScanSession::new(CaptureConfig::default());
        let text = "X".repeat(30);
        assert_eq!(session.accept_paste(&text, false), Some(text.clone()));
        assert_eq!(session.accept_paste(&text, true), None);
        assert_eq!(session.accept_paste("too short", false), None);
    }

    #[test]
    fn test_other_keys_only_refresh_timing() {
        let mut session = ScanSession::new(CaptureConfig::default());
        session.handle_key(KeyEvent::new(Key::Char('A'), 0));
        assert_eq!(session.handle_key(KeyEvent::new(Key::Other, 100)), None);
        session.handle_key(KeyEvent::new(Key::Char('B'), 200));
        assert_eq!(session.buffer(), "AB");
    }

    #[test]
    fn test_deadline_saturates_at_clock_end() {
        let mut session = ScanSession::new(CaptureConfig::default());
        session.handle_key(KeyEvent::new(Key::Char('A'), u64::MAX - 10));
        assert_eq!(session.poll(u64::MAX - 5), None);
        assert_eq!(session.buffer(), "A");
        assert_eq!(session.poll(u64::MAX), None);
        assert_eq!(session.buffer(), "");
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut first = ScanSession::new(CaptureConfig::default());
        let mut second = ScanSession::new(CaptureConfig::default());
        first.handle_key(KeyEvent::new(Key::Char('A'), 0));
        second.handle_key(KeyEvent::new(Key::Char('B'), 0));
        assert_eq!(first.buffer(), "A");
        assert_eq!(second.buffer(), "B");
    }

    #[test]
    fn test_scan_status() {
        let config = CaptureConfig::default();
        assert_eq!(ScanStatus::of("   ", &config), ScanStatus::Empty);
        assert_eq!(ScanStatus::of("P<UTO", &config), ScanStatus::Waiting);
        assert_eq!(ScanStatus::of(&"X".repeat(30), &config), ScanStatus::Ready);
    }

    #[test]
    fn test_process_scan_outcomes() {
        let parser = MrzParser::with_reference_year(2024);
        match process_scan("P<UTO", &parser) {
            ScanOutcome::Incomplete(err) => assert!(err.is_transient()),
            other => panic!("expected incomplete scan, got {:?}", other),
        }
        let scan = "I<UTOD231458907<<<<<<<<<<<<<<<\n7408122F1204159UTO<<<<<<<<<<<6\nERIKSSON<<ANNA<MARIA<<<<<<<<<<";
        match process_scan(scan, &parser) {
            ScanOutcome::Parsed(doc) => assert_eq!(doc.surname, "ERIKSSON"),
            other => panic!("expected parsed scan, got {:?}", other),
        }
    }
}
