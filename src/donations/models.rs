use serde::{Serialize, Serializer};

// snapshot
//  ├── collected     (€, label "Montant collecté")
//  ├── minGoal       (€, label "Objectif Minimum")
//  ├── optGoal       (€, label "Objectif Optimum")
//  ├── daysLeft      ("Plus que N jours")
//  ├── donors        ("Donateurs N")
//  ├── lastUpdated   (HH:MM:SS, when the snapshot was built)
//  └── provenance    (live | fallback, per field)

/// A field value tagged with where it came from.
///
/// Extraction never fails: a miss yields `Fallback` carrying the configured
/// constant instead of an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extracted<T> {
    Live(T),
    Fallback(T),
}

impl<T: Copy> Extracted<T> {
    pub fn value(&self) -> T {
        match self {
            Extracted::Live(v) | Extracted::Fallback(v) => *v,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Extracted::Live(_))
    }

    pub fn source(&self) -> FieldSource {
        if self.is_live() {
            FieldSource::Live
        } else {
            FieldSource::Fallback
        }
    }
}

impl<T: Copy + Serialize> Serialize for Extracted<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldSource {
    Live,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Provenance {
    pub collected: FieldSource,
    pub min_goal: FieldSource,
    pub opt_goal: FieldSource,
    pub days_left: FieldSource,
    pub donors: FieldSource,
}

/// One extraction cycle's worth of campaign numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationSnapshot {
    pub collected: Extracted<f64>,
    pub min_goal: Extracted<f64>,
    pub opt_goal: Extracted<f64>,
    pub days_left: Extracted<u32>,
    pub donors: Extracted<u32>,
    pub last_updated: String,
    pub provenance: Provenance,
}

impl DonationSnapshot {
    pub fn new(
        collected: Extracted<f64>,
        min_goal: Extracted<f64>,
        opt_goal: Extracted<f64>,
        days_left: Extracted<u32>,
        donors: Extracted<u32>,
        last_updated: String,
    ) -> Self {
        let provenance = Provenance {
            collected: collected.source(),
            min_goal: min_goal.source(),
            opt_goal: opt_goal.source(),
            days_left: days_left.source(),
            donors: donors.source(),
        };

        Self {
            collected,
            min_goal,
            opt_goal,
            days_left,
            donors,
            last_updated,
            provenance,
        }
    }

    /// Share of the optimum goal reached, clamped to 0..=100.
    pub fn percent_of_optimum(&self) -> f64 {
        ratio_percent(self.collected.value(), self.opt_goal.value())
    }

    /// Where the minimum goal sits on a bar scaled to the optimum goal.
    pub fn min_marker_percent(&self) -> f64 {
        ratio_percent(self.min_goal.value(), self.opt_goal.value())
    }
}

fn ratio_percent(part: f64, whole: f64) -> f64 {
    if whole > 0.0 && part.is_finite() {
        (part / whole * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Label to anchor on, plus the value used when the label or figure is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionField {
    pub label: &'static str,
    pub fallback: f64,
}

impl ExtractionField {
    pub const fn new(label: &'static str, fallback: f64) -> Self {
        Self { label, fallback }
    }
}

/// The three monetary fields read from the campaign page.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignFields {
    pub collected: ExtractionField,
    pub min_goal: ExtractionField,
    pub opt_goal: ExtractionField,
}

impl CampaignFields {
    pub fn new(min_goal_fallback: f64, opt_goal_fallback: f64) -> Self {
        Self {
            collected: ExtractionField::new("Montant collecté", 0.0),
            min_goal: ExtractionField::new("Objectif Minimum", min_goal_fallback),
            opt_goal: ExtractionField::new("Objectif Optimum", opt_goal_fallback),
        }
    }
}

impl Default for CampaignFields {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MIN_GOAL, crate::config::DEFAULT_OPT_GOAL)
    }
}
