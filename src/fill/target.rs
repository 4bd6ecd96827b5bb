use crate::config::FillConfig;
use crate::fill::plan::{FillPlan, FillSlot, FillStep, TargetKind};
use crate::models::MrzDocument;
use crate::utils::MrzError;
use log::{debug, warn};

/// Something a decoded record can be written into. Implementations own the
/// widget access and honour `FillStep::delay_ms`.
pub trait FillTarget {
    fn kind(&self) -> TargetKind;

    fn write(&mut self, step: &FillStep) -> Result<(), MrzError>;
}

#[derive(Debug, Default)]
pub struct FillReport {
    pub written: Vec<FillSlot>,
    pub failed: Vec<(FillSlot, String)>,
}

impl FillReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct Filler {
    config: FillConfig,
}

impl Filler {
    pub fn new(config: FillConfig) -> Self {
        Filler { config }
    }

    pub fn plan(&self, document: &MrzDocument, target: TargetKind) -> FillPlan {
        FillPlan::for_document(document, target, &self.config)
    }

    /// Write `document` into `target`. A rejected write is recorded and the
    /// remaining steps still run.
    pub fn fill(&self, target: &mut dyn FillTarget, document: &MrzDocument) -> FillReport {
        let plan = self.plan(document, target.kind());
        let mut report = FillReport::default();

        for step in &plan.steps {
            match target.write(step) {
                Ok(()) => {
                    debug!("Filled {} with {:?}", step.slot, step.value);
                    report.written.push(step.slot.clone());
                }
                Err(err) => {
                    warn!("Could not fill {}: {}", step.slot, err);
                    report.failed.push((step.slot.clone(), err.to_string()));
                }
            }
        }
        report
    }
}
