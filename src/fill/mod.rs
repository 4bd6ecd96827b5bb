// Field fill planning for third-party data-entry widgets
pub mod options;
pub mod plan;
pub mod target;

pub use options::{format_display_date, format_iso_date, resolve_select_value};
pub use plan::{title_for_gender, FillPlan, FillSlot, FillStep, GridColumn, TargetKind};
pub use target::{FillReport, FillTarget, Filler};
