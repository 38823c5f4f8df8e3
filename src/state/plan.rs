use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::state::data_model::{self, Fields, RowId};
use crate::state::edit::CellUpdate;
use crate::state::schedule;

/// The four tables a producer works in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Feature {
    #[default]
    Leads,
    Budget,
    Tasks,
    Templates,
}

impl Feature {
    pub fn all() -> &'static [Self] {
        &[Self::Leads, Self::Budget, Self::Tasks, Self::Templates]
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Self::Leads => "feature.leads",
            Self::Budget => "feature.budget",
            Self::Tasks => "feature.tasks",
            Self::Templates => "feature.templates",
        }
    }

    pub fn empty_key(self) -> &'static str {
        match self {
            Self::Leads => "empty.leads",
            Self::Budget => "empty.budget",
            Self::Tasks => "empty.tasks",
            Self::Templates => "empty.templates",
        }
    }
}

/// On-disk shape of a plan file. Sections a file omits default to empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wedding_date: Option<String>,
    #[serde(default)]
    pub leads: Vec<Fields>,
    #[serde(default)]
    pub budget: Vec<Fields>,
    #[serde(default)]
    pub tasks: Vec<Fields>,
    #[serde(default)]
    pub templates: Vec<Fields>,
}

/// The owning feature behind the table callbacks: holds the rows, applies
/// committed updates, and tracks unsaved changes. Persistence happens in
/// `io::plan_io`, outside this module.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlanState {
    plan: PlanFile,
    dirty: bool,
}

impl PlanState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_plan(plan: PlanFile) -> Self {
        Self { plan, dirty: false }
    }

    pub fn plan(&self) -> &PlanFile {
        &self.plan
    }

    pub fn rows(&self, feature: Feature) -> &[Fields] {
        match feature {
            Feature::Leads => &self.plan.leads,
            Feature::Budget => &self.plan.budget,
            Feature::Tasks => &self.plan.tasks,
            Feature::Templates => &self.plan.templates,
        }
    }

    fn rows_mut(&mut self, feature: Feature) -> &mut Vec<Fields> {
        match feature {
            Feature::Leads => &mut self.plan.leads,
            Feature::Budget => &mut self.plan.budget,
            Feature::Tasks => &mut self.plan.tasks,
            Feature::Templates => &mut self.plan.templates,
        }
    }

    pub fn wedding_date(&self) -> Option<NaiveDate> {
        self.plan
            .wedding_date
            .as_deref()
            .and_then(schedule::parse_date)
    }

    pub fn set_wedding_date(&mut self, raw: &str) {
        let trimmed = raw.trim();
        let next = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        if next != self.plan.wedding_date {
            self.plan.wedding_date = next;
            self.dirty = true;
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    pub fn replace(&mut self, plan: PlanFile) {
        self.plan = plan;
        self.dirty = false;
    }

    /// Applies a committed cell edit. Unknown row ids and no-op values return
    /// `false` without marking the plan dirty.
    pub fn apply_cell_update(&mut self, feature: Feature, update: &CellUpdate) -> bool {
        let rows = self.rows_mut(feature);
        let Some(row) = rows
            .iter_mut()
            .find(|row| data_model::row_id(row).as_ref() == Some(&update.row_id))
        else {
            return false;
        };

        if row.get(&update.field) == Some(&update.value) {
            return false;
        }

        row.insert(update.field.clone(), update.value.clone());
        self.dirty = true;
        true
    }

    /// Appends a composed new row, assigning the next integer id.
    pub fn add_row(&mut self, feature: Feature, mut fields: Fields) -> RowId {
        let id = data_model::next_row_id(self.rows(feature));
        fields.insert("id".to_string(), Value::from(&id));
        self.rows_mut(feature).push(fields);
        self.dirty = true;
        id
    }

    pub fn delete_rows(&mut self, feature: Feature, ids: &[RowId]) -> usize {
        let rows = self.rows_mut(feature);
        let before = rows.len();
        rows.retain(|row| {
            data_model::row_id(row)
                .map(|id| !ids.contains(&id))
                .unwrap_or(true)
        });
        let removed = before - rows.len();
        if removed > 0 {
            self.dirty = true;
        }
        removed
    }
}
