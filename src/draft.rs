//! Project draft
//!
//! The text and number fields of the project-creation form, the category
//! list, and field-level validation. File state lives in
//! [`crate::upload`]; nothing here looks at it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::config::DraftConfig;

/// Project category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Environment,
    Education,
    Health,
    Infrastructure,
    Culture,
    Energy,
    Technology,
    Entrepreneurship,
}

impl Category {
    /// Get all categories for iteration, in menu order
    pub fn all() -> &'static [Category] {
        &[
            Category::Environment,
            Category::Education,
            Category::Health,
            Category::Infrastructure,
            Category::Culture,
            Category::Energy,
            Category::Technology,
            Category::Entrepreneurship,
        ]
    }

    /// Stable identifier used as the `<option>` value
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Environment => "environment",
            Category::Education => "education",
            Category::Health => "health",
            Category::Infrastructure => "infrastructure",
            Category::Culture => "culture",
            Category::Energy => "energy",
            Category::Technology => "technology",
            Category::Entrepreneurship => "entrepreneurship",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Environment => "Environnement",
            Category::Education => "Éducation",
            Category::Health => "Santé",
            Category::Infrastructure => "Infrastructure",
            Category::Culture => "Culture",
            Category::Energy => "Énergie",
            Category::Technology => "Technologie",
            Category::Entrepreneurship => "Entrepreneuriat",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .iter()
            .copied()
            .find(|c| c.slug() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// Form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Title,
    Description,
    Location,
    Category,
    GoalAmount,
    Duration,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[
            Field::Title,
            Field::Description,
            Field::Location,
            Field::Category,
            Field::GoalAmount,
            Field::Duration,
        ]
    }
}

/// Why a field failed validation. Messages are shown inline under the field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Le titre doit contenir au moins {min} caractères")]
    TitleTooShort { min: usize },

    #[error("La description doit contenir au moins {min} caractères")]
    DescriptionTooShort { min: usize },

    #[error("Veuillez indiquer un lieu valide")]
    LocationTooShort { min: usize },

    #[error("Veuillez sélectionner une catégorie")]
    CategoryMissing,

    #[error("Le montant doit être un nombre positif")]
    GoalNotPositive,

    #[error("La durée doit être un nombre positif")]
    DurationNotPositive,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::TitleTooShort { .. } => Field::Title,
            FieldError::DescriptionTooShort { .. } => Field::Description,
            FieldError::LocationTooShort { .. } => Field::Location,
            FieldError::CategoryMissing => Field::Category,
            FieldError::GoalNotPositive => Field::GoalAmount,
            FieldError::DurationNotPositive => Field::Duration,
        }
    }
}

/// Minimum lengths applied to the text fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftRules {
    pub title_min_chars: usize,
    pub description_min_chars: usize,
    pub location_min_chars: usize,
}

impl Default for DraftRules {
    fn default() -> Self {
        Self::from(&DraftConfig::default())
    }
}

impl From<&DraftConfig> for DraftRules {
    fn from(config: &DraftConfig) -> Self {
        Self {
            title_min_chars: config.title_min_chars,
            description_min_chars: config.description_min_chars,
            location_min_chars: config.location_min_chars,
        }
    }
}

/// Pass/fail of one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub field: Field,
    pub outcome: Result<(), FieldError>,
}

impl ValidationResult {
    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Reason shown next to the field, if it failed
    pub fn message(&self) -> Option<String> {
        self.outcome.as_ref().err().map(ToString::to_string)
    }
}

/// Per-field results of a whole-draft validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftReport {
    results: Vec<ValidationResult>,
}

impl DraftReport {
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(ValidationResult::passed)
    }

    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }

    pub fn errors(&self) -> impl Iterator<Item = &FieldError> {
        self.results.iter().filter_map(|r| r.outcome.as_ref().err())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.results
            .iter()
            .find(|r| r.field == field)
            .and_then(|r| r.outcome.as_ref().err())
    }

    /// Replace the result for one field
    pub(crate) fn update(&mut self, result: ValidationResult) {
        match self.results.iter_mut().find(|r| r.field == result.field) {
            Some(slot) => *slot = result,
            None => self.results.push(result),
        }
    }
}

/// In-progress project-creation form state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: Option<Category>,
    /// As typed; parsed on validation
    pub goal_amount: String,
    /// Campaign length in days, as typed
    pub duration: String,
}

impl ProjectDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every field empty
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    /// Set a text field by name. `Field::Category` takes a slug; an unknown
    /// slug clears the selection.
    pub fn set(&mut self, field: Field, value: &str) {
        match field {
            Field::Title => self.title = value.to_string(),
            Field::Description => self.description = value.to_string(),
            Field::Location => self.location = value.to_string(),
            Field::Category => self.category = value.parse().ok(),
            Field::GoalAmount => self.goal_amount = value.to_string(),
            Field::Duration => self.duration = value.to_string(),
        }
    }

    /// Goal amount in FCFA, if it is a positive number
    pub fn goal(&self) -> Option<f64> {
        parse_positive(&self.goal_amount)
    }

    /// Campaign length in days, if it is a positive number
    pub fn duration_days(&self) -> Option<f64> {
        parse_positive(&self.duration)
    }

    /// Check one field
    pub fn check(&self, field: Field, rules: &DraftRules) -> ValidationResult {
        let outcome = match field {
            Field::Title => min_chars(&self.title, rules.title_min_chars)
                .map_err(|min| FieldError::TitleTooShort { min }),
            Field::Description => min_chars(&self.description, rules.description_min_chars)
                .map_err(|min| FieldError::DescriptionTooShort { min }),
            Field::Location => min_chars(&self.location, rules.location_min_chars)
                .map_err(|min| FieldError::LocationTooShort { min }),
            Field::Category => self.category.map(|_| ()).ok_or(FieldError::CategoryMissing),
            Field::GoalAmount => self.goal().map(|_| ()).ok_or(FieldError::GoalNotPositive),
            Field::Duration => self.duration_days().map(|_| ()).ok_or(FieldError::DurationNotPositive),
        };
        ValidationResult { field, outcome }
    }

    /// Check every field
    pub fn validate(&self, rules: &DraftRules) -> DraftReport {
        DraftReport {
            results: Field::all().iter().map(|&f| self.check(f, rules)).collect(),
        }
    }
}

/// Trimmed character count must reach `min`; returns `min` on failure
fn min_chars(value: &str, min: usize) -> Result<(), usize> {
    let len = value.trim().chars().count();
    if len == 0 || len < min {
        Err(min)
    } else {
        Ok(())
    }
}

fn parse_positive(value: &str) -> Option<f64> {
    let v: f64 = value.trim().parse().ok()?;
    (v.is_finite() && v > 0.0).then_some(v)
}
