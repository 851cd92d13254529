use serde::{Deserialize, Serialize};

use super::Todo;

/// Three-way status filter of the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Active, StatusFilter::Completed];

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => !todo.completed,
            StatusFilter::Completed => todo.completed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "전체",
            StatusFilter::Active => "진행중",
            StatusFilter::Completed => "완료",
        }
    }
}
