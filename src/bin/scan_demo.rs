use mrzfill::capture::{process_scan, Key, KeyEvent, ScanOutcome, ScanSession, ScanStatus};
use mrzfill::config::Config;
use mrzfill::fill::{FillStep, FillTarget, Filler, TargetKind};
use mrzfill::{MrzError, MrzParser};

const SAMPLE_MRZ: &str = "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<\n\
                          L898902C36UTO7408122F1204159ZE184226B<<<<<10\n";

// Prints every write instead of touching a real grid
struct ConsoleGrid;

impl FillTarget for ConsoleGrid {
    fn kind(&self) -> TargetKind {
        TargetKind::RowData
    }

    fn write(&mut self, step: &FillStep) -> Result<(), MrzError> {
        if step.delay_ms > 0 {
            println!("  (after {}ms) {} <- {}", step.delay_ms, step.slot, step.value);
        } else {
            println!("  {} <- {}", step.slot, step.value);
        }
        Ok(())
    }
}

fn main() -> Result<(), MrzError> {
    env_logger::init();

    println!("MRZ Scan Demo");
    println!("-------------");

    let config = Config::default();
    let parser = MrzParser::from_config(&config.parser);
    let mut session = ScanSession::new(config.capture.clone());

    println!("Simulating a wedge scanner typing {} keys...", SAMPLE_MRZ.len());
    let mut now = 0;
    let mut scan = None;
    for c in SAMPLE_MRZ.chars() {
        let key = if c == '\n' { Key::Enter } else { Key::Char(c) };
        if let Some(buffer) = session.handle_key(KeyEvent::new(key, now)) {
            scan = Some(buffer);
        }
        now += 4;
    }

    let scan = match scan.or_else(|| session.poll(now + config.capture.finalize_delay_ms)) {
        Some(scan) => scan,
        None => {
            println!("\nNo complete scan captured.");
            return Ok(());
        }
    };

    match ScanStatus::of(&scan, &config.capture) {
        ScanStatus::Ready => println!("\nScan ready ({} chars), parsing...", scan.chars().count()),
        status => {
            println!("\nScan status {:?}, waiting for more input.", status);
            return Ok(());
        }
    }

    match process_scan(&scan, &parser) {
        ScanOutcome::Parsed(document) => {
            println!("\nDECODED RECORD:");
            for (label, value) in document.fields() {
                println!("  {}: {}", label, value);
            }

            println!("\nFILLING GRID ROW:");
            let report = Filler::new(config.fill.clone()).fill(&mut ConsoleGrid, &document);
            println!("\n  {} field(s) written", report.written.len());
        }
        ScanOutcome::Incomplete(err) => {
            println!("\nScan not usable yet: {}", err);
        }
    }

    Ok(())
}
