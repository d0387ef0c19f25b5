use serde::Serialize;

use super::field_projector::FieldSet;
use super::ordering::OrderBy;

/// Every table-backed resource the gateway exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Skills,
    Education,
    Work,
    Community,
    Projects,
    EPortfolio,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Skills,
        ResourceKind::Education,
        ResourceKind::Work,
        ResourceKind::Community,
        ResourceKind::Projects,
        ResourceKind::EPortfolio,
    ];

    /// URL segment under `/api`.
    pub fn path_segment(self) -> &'static str {
        match self {
            ResourceKind::Skills => "skills",
            ResourceKind::Education => "education",
            ResourceKind::Work => "work",
            ResourceKind::Community => "community",
            ResourceKind::Projects => "projects",
            ResourceKind::EPortfolio => "e-portfolio",
        }
    }

    pub fn table(self) -> &'static str {
        match self {
            ResourceKind::Skills => "skills",
            ResourceKind::Education => "education",
            ResourceKind::Work => "work_experience",
            ResourceKind::Community => "community_service",
            ResourceKind::Projects => "other_information",
            ResourceKind::EPortfolio => "e_portfolio",
        }
    }

    /// Singular label used in response messages.
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Skills => "Skill",
            ResourceKind::Education => "Education record",
            ResourceKind::Work => "Work record",
            ResourceKind::Community => "Community service record",
            ResourceKind::Projects => "Project",
            ResourceKind::EPortfolio => "E-portfolio activity",
        }
    }

    pub fn not_found_message(self) -> String {
        format!("{} not found", self.label())
    }

    pub fn fields(self) -> FieldSet {
        match self {
            ResourceKind::Skills => FieldSet {
                allowed: &["skill_name", "proficiency", "category"],
                dates: &[],
                mandatory: &["skill_name", "proficiency"],
            },
            ResourceKind::Education => FieldSet {
                allowed: &[
                    "institute_name",
                    "certification",
                    "start_date",
                    "finish_date",
                    "description",
                ],
                dates: &["start_date", "finish_date"],
                mandatory: &["institute_name", "certification", "start_date"],
            },
            ResourceKind::Work => FieldSet {
                allowed: &[
                    "company_name",
                    "role",
                    "start_date",
                    "end_date",
                    "description",
                ],
                dates: &["start_date", "end_date"],
                mandatory: &["company_name", "role", "start_date"],
            },
            ResourceKind::Community => FieldSet {
                allowed: &[
                    "programme_name",
                    "role",
                    "description",
                    "start_date",
                    "end_date",
                ],
                dates: &["start_date", "end_date"],
                mandatory: &["programme_name", "role", "description"],
            },
            ResourceKind::Projects => FieldSet {
                allowed: &["project_name", "description", "technologies", "links"],
                dates: &[],
                mandatory: &["project_name", "description"],
            },
            ResourceKind::EPortfolio => FieldSet {
                allowed: &[
                    "activity_name",
                    "description",
                    "category",
                    "organization",
                    "role",
                    "reflection",
                    "outcome",
                    "skills_gained",
                    "evidence_links",
                    "start_date",
                    "end_date",
                ],
                dates: &["start_date", "end_date"],
                mandatory: &["activity_name", "description"],
            },
        }
    }

    /// Listing order; `None` leaves the store's natural order.
    pub fn default_order(self) -> Option<OrderBy> {
        match self {
            ResourceKind::Education | ResourceKind::Work => Some(OrderBy::desc("start_date")),
            _ => None,
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path_segment())
    }
}
