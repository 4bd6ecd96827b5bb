use crate::config::FillConfig;
use crate::fill::options::{format_display_date, format_iso_date, resolve_select_value};
use crate::models::{Gender, MrzDocument};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column ids of the guest grid the record is written into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridColumn {
    #[serde(rename = "TITLEID_TITLE")]
    Title,
    #[serde(rename = "NAME")]
    FirstName,
    #[serde(rename = "LNAME")]
    Surname,
    #[serde(rename = "NATIONALITYID_NAMECODE")]
    Nationality,
    #[serde(rename = "NATIONALIDNO")]
    NationalId,
    #[serde(rename = "PASSPORTNO")]
    Passport,
    #[serde(rename = "BIRTHDATE")]
    BirthDate,
    #[serde(rename = "GENDER")]
    Gender,
}

impl GridColumn {
    pub fn id(&self) -> &'static str {
        match self {
            GridColumn::Title => "TITLEID_TITLE",
            GridColumn::FirstName => "NAME",
            GridColumn::Surname => "LNAME",
            GridColumn::Nationality => "NATIONALITYID_NAMECODE",
            GridColumn::NationalId => "NATIONALIDNO",
            GridColumn::Passport => "PASSPORTNO",
            GridColumn::BirthDate => "BIRTHDATE",
            GridColumn::Gender => "GENDER",
        }
    }
}

impl fmt::Display for GridColumn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// How a target accepts values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetKind {
    /// Grid row model with a set-value-by-column API.
    RowData,
    /// Grid cells opened and edited one by one.
    CellEditor,
    /// Table cells addressed by position.
    IndexedCells,
    /// Record dialog with named element fields.
    DialogForm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillSlot {
    Column(GridColumn),
    CellIndex(usize),
    ElementField(GridColumn),
}

impl fmt::Display for FillSlot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FillSlot::Column(column) => write!(f, "column {}", column),
            FillSlot::CellIndex(index) => write!(f, "cell #{}", index),
            FillSlot::ElementField(column) => write!(f, "field {}", column),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillStep {
    pub slot: FillSlot,
    pub value: String,
    /// How long the target should wait before this write.
    pub delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillPlan {
    pub target: TargetKind,
    pub steps: Vec<FillStep>,
}

pub fn title_for_gender(gender: Gender, config: &FillConfig) -> String {
    match gender {
        Gender::Male => config.title_male.clone(),
        Gender::Female => config.title_female.clone(),
        Gender::Unspecified => String::new(),
    }
}

type Planner = fn(&MrzDocument, &FillConfig) -> Vec<(FillSlot, String)>;

// Kendo table positions
const CELL_GIVEN_NAME: usize = 3;
const CELL_SURNAME: usize = 4;
const CELL_NATIONALITY: usize = 5;
const CELL_PERSONAL_NUMBER: usize = 6;
const CELL_PASSPORT: usize = 7;
const CELL_BIRTH_DATE: usize = 8;
const CELL_GENDER: usize = 9;

impl FillPlan {
    /// Build the ordered writes for `target`. Empty values are skipped and
    /// the birth date always goes last, delayed.
    pub fn for_document(document: &MrzDocument, target: TargetKind, config: &FillConfig) -> Self {
        let planner: Planner = match target {
            TargetKind::RowData => Self::row_data_values,
            TargetKind::CellEditor => Self::cell_editor_values,
            TargetKind::IndexedCells => Self::indexed_cell_values,
            TargetKind::DialogForm => Self::dialog_form_values,
        };

        let birth_date_delay_ms = match target {
            TargetKind::IndexedCells => config.indexed_cell_delay_ms,
            _ => config.birth_date_delay_ms,
        };

        let mut immediate = Vec::new();
        let mut deferred = Vec::new();
        for (slot, value) in planner(document, config) {
            if value.is_empty() {
                continue;
            }
            if Self::is_birth_date(&slot) {
                deferred.push(FillStep {
                    slot,
                    value,
                    delay_ms: birth_date_delay_ms,
                });
            } else {
                immediate.push(FillStep {
                    slot,
                    value,
                    delay_ms: 0,
                });
            }
        }
        immediate.extend(deferred);

        FillPlan {
            target,
            steps: immediate,
        }
    }

    fn is_birth_date(slot: &FillSlot) -> bool {
        matches!(
            slot,
            FillSlot::Column(GridColumn::BirthDate)
                | FillSlot::ElementField(GridColumn::BirthDate)
                | FillSlot::CellIndex(CELL_BIRTH_DATE)
        )
    }

    // The document number only means "passport" on a P document.
    fn passport_number(document: &MrzDocument) -> String {
        if document.is_passport() {
            document.passport_number.clone()
        } else {
            String::new()
        }
    }

    fn column_values(
        document: &MrzDocument,
        config: &FillConfig,
        birth_date: String,
    ) -> Vec<(GridColumn, String)> {
        vec![
            (GridColumn::Title, title_for_gender(document.gender_kind(), config)),
            (GridColumn::FirstName, document.given_name.clone()),
            (GridColumn::Surname, document.surname.clone()),
            (GridColumn::Nationality, document.nationality.clone()),
            (GridColumn::NationalId, document.personal_number.clone()),
            (GridColumn::Passport, Self::passport_number(document)),
            (GridColumn::Gender, document.gender.clone()),
            (GridColumn::BirthDate, birth_date),
        ]
    }

    fn row_data_values(document: &MrzDocument, config: &FillConfig) -> Vec<(FillSlot, String)> {
        Self::column_values(document, config, format_iso_date(&document.birth_date))
            .into_iter()
            .map(|(column, value)| (FillSlot::Column(column), value))
            .collect()
    }

    fn cell_editor_values(document: &MrzDocument, config: &FillConfig) -> Vec<(FillSlot, String)> {
        Self::column_values(document, config, format_display_date(&document.birth_date))
            .into_iter()
            .map(|(column, value)| (FillSlot::Column(column), value))
            .collect()
    }

    fn dialog_form_values(document: &MrzDocument, config: &FillConfig) -> Vec<(FillSlot, String)> {
        Self::column_values(document, config, format_display_date(&document.birth_date))
            .into_iter()
            .map(|(column, value)| {
                let value = resolve_select_value(column, &value);
                (FillSlot::ElementField(column), value)
            })
            .collect()
    }

    fn indexed_cell_values(document: &MrzDocument, _config: &FillConfig) -> Vec<(FillSlot, String)> {
        vec![
            (FillSlot::CellIndex(CELL_GIVEN_NAME), document.given_name.clone()),
            (FillSlot::CellIndex(CELL_SURNAME), document.surname.clone()),
            (FillSlot::CellIndex(CELL_NATIONALITY), document.nationality.clone()),
            (FillSlot::CellIndex(CELL_PERSONAL_NUMBER), document.personal_number.clone()),
            (FillSlot::CellIndex(CELL_PASSPORT), Self::passport_number(document)),
            (FillSlot::CellIndex(CELL_GENDER), document.gender.clone()),
            (FillSlot::CellIndex(CELL_BIRTH_DATE), document.birth_date.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passport() -> MrzDocument {
        MrzDocument {
            document_type: "P".to_string(),
            issuing_country: "TUR".to_string(),
            surname: "YILMAZ".to_string(),
            given_name: "AHMET CAN".to_string(),
            passport_number: "U12345678".to_string(),
            nationality: "TUR".to_string(),
            birth_date: "1985-03-07".to_string(),
            gender: "Erkek".to_string(),
            expiry_date: "2030-01-01".to_string(),
            personal_number: "12345678901".to_string(),
        }
    }

    fn slots(plan: &FillPlan) -> Vec<FillSlot> {
        plan.steps.iter().map(|step| step.slot.clone()).collect()
    }

    #[test]
    fn test_row_data_plan() {
        let plan = FillPlan::for_document(&passport(), TargetKind::RowData, &FillConfig::default());
        assert_eq!(plan.steps[0].slot, FillSlot::Column(GridColumn::Title));
        assert_eq!(plan.steps[0].value, "Bay");
        let last = plan.steps.last().unwrap();
        assert_eq!(last.slot, FillSlot::Column(GridColumn::BirthDate));
        assert_eq!(last.value, "1985-03-07");
        assert_eq!(last.delay_ms, 300);
        assert!(plan.steps[..plan.steps.len() - 1].iter().all(|s| s.delay_ms == 0));
    }

    #[test]
    fn test_id_card_skips_passport_column() {
        let mut doc = passport();
        doc.document_type = "I".to_string();
        let plan = FillPlan::for_document(&doc, TargetKind::RowData, &FillConfig::default());
        assert!(!slots(&plan).contains(&FillSlot::Column(GridColumn::Passport)));
    }

    #[test]
    fn test_empty_values_and_unspecified_title_skipped() {
        let mut doc = passport();
        doc.gender = Gender::UNSPECIFIED_LABEL.to_string();
        doc.birth_date = String::new();
        doc.personal_number = String::new();
        let plan = FillPlan::for_document(&doc, TargetKind::CellEditor, &FillConfig::default());
        let slots = slots(&plan);
        assert!(!slots.contains(&FillSlot::Column(GridColumn::Title)));
        assert!(!slots.contains(&FillSlot::Column(GridColumn::BirthDate)));
        assert!(!slots.contains(&FillSlot::Column(GridColumn::NationalId)));
    }

    #[test]
    fn test_cell_editor_uses_display_date() {
        let plan = FillPlan::for_document(&passport(), TargetKind::CellEditor, &FillConfig::default());
        assert_eq!(plan.steps.last().unwrap().value, "07.03.1985");
    }

    #[test]
    fn test_indexed_cells_order() {
        let plan = FillPlan::for_document(&passport(), TargetKind::IndexedCells, &FillConfig::default());
        let indices: Vec<usize> = plan
            .steps
            .iter()
            .map(|step| match step.slot {
                FillSlot::CellIndex(index) => index,
                ref other => panic!("unexpected slot {:?}", other),
            })
            .collect();
        assert_eq!(indices, vec![3, 4, 5, 6, 7, 9, 8]);
        assert_eq!(plan.steps.last().unwrap().delay_ms, 280);
    }

    #[test]
    fn test_dialog_form_resolves_options() {
        let mut doc = passport();
        doc.gender = "Kadin".to_string();
        let plan = FillPlan::for_document(&doc, TargetKind::DialogForm, &FillConfig::default());
        let value_of = |column| {
            plan.steps
                .iter()
                .find(|step| step.slot == FillSlot::ElementField(column))
                .map(|step| step.value.clone())
        };
        assert_eq!(value_of(GridColumn::Nationality), Some("Turkey (TUR)".to_string()));
        assert_eq!(value_of(GridColumn::Gender), Some("Kadın".to_string()));
        assert_eq!(value_of(GridColumn::Title), Some("Bayan".to_string()));
        assert_eq!(value_of(GridColumn::BirthDate), Some("07.03.1985".to_string()));
    }

    #[test]
    fn test_plan_serializes_column_ids() {
        let plan = FillPlan::for_document(&passport(), TargetKind::RowData, &FillConfig::default());
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["target"], "row-data");
        assert_eq!(json["steps"][0]["slot"]["column"], "TITLEID_TITLE");
    }
}
