//! Professor record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend identifier of a professor.
pub type ProfessorId = u64;

/// Identifier of a professor on the external rating site.
///
/// Older backends send a plain number, newer ones an opaque GraphQL id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RateMyProfId {
    /// Legacy numeric id.
    Numeric(u64),
    /// Opaque (base64) id.
    Opaque(String),
}

impl fmt::Display for RateMyProfId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateMyProfId::Numeric(id) => write!(f, "{}", id),
            RateMyProfId::Opaque(id) => f.write_str(id),
        }
    }
}

/// A professor as served by `GET /api/professors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Professor {
    /// Unique id within the list.
    pub id: ProfessorId,
    /// Display name.
    pub name: String,
    /// Department name.
    pub department: String,
    /// Course code, serialized as `class`.
    #[serde(rename = "class")]
    pub class_name: String,
    /// Average grade, usually a letter grade.
    #[serde(default)]
    pub avg_grade: Option<String>,
    /// Rating-site identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratemyprof_id: Option<RateMyProfId>,
    /// Overall rating in `[0, 5]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_rating: Option<f64>,
    /// Number of ratings backing `overall_rating`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_ratings: Option<u32>,
}

impl Professor {
    /// Create a professor without rating data.
    pub fn new(
        id: ProfessorId,
        name: impl Into<String>,
        department: impl Into<String>,
        class_name: impl Into<String>,
        avg_grade: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            department: department.into(),
            class_name: class_name.into(),
            avg_grade: Some(avg_grade.into()),
            ratemyprof_id: None,
            overall_rating: None,
            num_ratings: None,
        }
    }

    /// Attach rating-site data.
    pub fn with_rating(mut self, overall_rating: f64, num_ratings: Option<u32>) -> Self {
        self.overall_rating = Some(overall_rating);
        self.num_ratings = num_ratings;
        self
    }

    /// Check whether the query occurs in the class, name or department,
    /// ignoring case.
    pub fn matches(&self, query: &str) -> bool {
        self.matches_folded(&query.to_lowercase())
    }

    /// Same as [`Professor::matches`] with an already lowercased needle.
    pub(crate) fn matches_folded(&self, needle: &str) -> bool {
        [&self.class_name, &self.name, &self.department]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }

    /// Rating, only when the professor has actually been rated.
    pub fn positive_rating(&self) -> Option<f64> {
        self.overall_rating.filter(|r| *r > 0.0)
    }
}
