use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    #[default]
    #[serde(rename = "")]
    Unset,
    Low,
    Medium,
    High,
    Urgent,
}

impl PriorityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityLevel::Unset => "",
            PriorityLevel::Low => "low",
            PriorityLevel::Medium => "medium",
            PriorityLevel::High => "high",
            PriorityLevel::Urgent => "urgent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriorityLevel::Unset => "Select Item",
            PriorityLevel::Low => "Low Priority",
            PriorityLevel::Medium => "Medium Priority",
            PriorityLevel::High => "High Priority",
            PriorityLevel::Urgent => "Urgent",
        }
    }

    pub fn parse(s: &str) -> PriorityLevel {
        match s.to_lowercase().as_str() {
            "low" => PriorityLevel::Low,
            "medium" => PriorityLevel::Medium,
            "high" => PriorityLevel::High,
            "urgent" => PriorityLevel::Urgent,
            _ => PriorityLevel::Unset,
        }
    }
}

/// How many fitting appointments the production plan schedules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FittingMode {
    #[default]
    #[serde(rename = "")]
    Unset,
    None,
    Single,
    Multiple,
    FinalOnly,
}

impl FittingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FittingMode::Unset => "",
            FittingMode::None => "none",
            FittingMode::Single => "single",
            FittingMode::Multiple => "multiple",
            FittingMode::FinalOnly => "final-only",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FittingMode::Unset => "Select Item",
            FittingMode::None => "No Fitting Required",
            FittingMode::Single => "Single Fitting",
            FittingMode::Multiple => "Multiple Fittings",
            FittingMode::FinalOnly => "Final Fitting Only",
        }
    }

    pub fn parse(s: &str) -> FittingMode {
        match s {
            "none" => FittingMode::None,
            "single" => FittingMode::Single,
            "multiple" => FittingMode::Multiple,
            "final-only" => FittingMode::FinalOnly,
            _ => FittingMode::Unset,
        }
    }

    /// Whether the plan actually books a fitting appointment.
    pub fn requires_fitting(&self) -> bool {
        matches!(
            self,
            FittingMode::Single | FittingMode::Multiple | FittingMode::FinalOnly
        )
    }
}

/// One of the seven fixed production stages. The stage set is fixed;
/// only the target date is user-editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: u32,
    pub name: String,
    pub icon: String,
    pub date: String,
}

const MILESTONE_STAGES: [(u32, &str, &str); 7] = [
    (1, "Measurement & Pattern", "ruler"),
    (2, "Cutting", "scissors"),
    (3, "Quality Control Inspection 1", "shield"),
    (4, "Stitching", "needle"),
    (5, "Quality Control Inspection 2", "shield"),
    (6, "Fitting", "user"),
    (7, "Final Delivery", "package"),
];

fn default_milestones() -> Vec<Milestone> {
    MILESTONE_STAGES
        .iter()
        .map(|(id, name, icon)| Milestone {
            id: *id,
            name: name.to_string(),
            icon: icon.to_string(),
            date: String::new(),
        })
        .collect()
}

/// Production schedule slice of the order form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePlan {
    pub start_date: String,
    pub deadline_date: String,
    pub priority_level: PriorityLevel,
    pub fitting_required: FittingMode,
    pub notify_client: bool,
    pub additional_notes: String,
    pub milestones: Vec<Milestone>,
}

impl Default for TimelinePlan {
    fn default() -> Self {
        Self {
            start_date: "31/05/2025".to_string(),
            deadline_date: "14/06/2025".to_string(),
            priority_level: PriorityLevel::Unset,
            fitting_required: FittingMode::Unset,
            notify_client: true,
            additional_notes: String::new(),
            milestones: default_milestones(),
        }
    }
}

impl TimelinePlan {
    pub fn set_milestone_date(&mut self, id: u32, date: &str) {
        if let Some(m) = self.milestones.iter_mut().find(|m| m.id == id) {
            m.date = date.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plan_has_seven_fixed_milestones() {
        let plan = TimelinePlan::default();
        assert_eq!(plan.milestones.len(), 7);
        assert_eq!(plan.milestones[0].name, "Measurement & Pattern");
        assert_eq!(plan.milestones[6].name, "Final Delivery");
        assert!(plan.milestones.iter().all(|m| m.date.is_empty()));
    }

    #[test]
    fn test_milestone_date_update_leaves_others_unchanged() {
        let mut plan = TimelinePlan::default();
        plan.set_milestone_date(3, "2025-06-05");

        for m in &plan.milestones {
            if m.id == 3 {
                assert_eq!(m.date, "2025-06-05");
            } else {
                assert_eq!(m.date, "");
            }
        }
    }

    #[test]
    fn test_plan_deserializes_from_owned_json() {
        let json = serde_json::to_string(&TimelinePlan::default()).unwrap();
        let plan: TimelinePlan = serde_json::from_str(&json).unwrap();
        assert_eq!(plan.milestones.len(), 7);
        assert_eq!(plan.milestones[1].icon, "scissors");
    }

    #[test]
    fn test_priority_parse_is_case_insensitive() {
        assert_eq!(PriorityLevel::parse("HIGH"), PriorityLevel::High);
        assert_eq!(PriorityLevel::parse("Urgent"), PriorityLevel::Urgent);
        assert_eq!(PriorityLevel::parse("standard"), PriorityLevel::Unset);
    }

    #[test]
    fn test_requires_fitting() {
        assert!(!FittingMode::Unset.requires_fitting());
        assert!(!FittingMode::None.requires_fitting());
        assert!(FittingMode::Single.requires_fitting());
        assert!(FittingMode::FinalOnly.requires_fitting());
    }
}
