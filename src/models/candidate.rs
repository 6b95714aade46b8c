use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::skill::Skill;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    Active,
    Interview,
    Rejected,
}

impl CandidateStatus {
    pub const ALL: [CandidateStatus; 3] = [
        CandidateStatus::Active,
        CandidateStatus::Interview,
        CandidateStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::Active => "active",
            CandidateStatus::Interview => "interview",
            CandidateStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CandidateStatus::Active => "Active",
            CandidateStatus::Interview => "Interview",
            CandidateStatus::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CandidateStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(CandidateStatus::Active),
            "interview" => Ok(CandidateStatus::Interview),
            "rejected" => Ok(CandidateStatus::Rejected),
            other => Err(format!("Unknown candidate status: {}", other)),
        }
    }
}

// List projection: the list endpoint omits personal-contact fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub status: CandidateStatus,
    #[serde(default)]
    pub skills: Vec<Skill>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateDetail {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub status: CandidateStatus,
    #[serde(default)]
    pub skills: Vec<Skill>,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CandidateDetail> for Candidate {
    fn from(detail: CandidateDetail) -> Self {
        Candidate {
            id: detail.id,
            name: detail.name,
            position: detail.position,
            status: detail.status,
            skills: detail.skills,
            created_at: detail.created_at,
            updated_at: detail.updated_at,
        }
    }
}
