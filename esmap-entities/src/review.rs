use crate::{id::Id, score::ScoreProfile, time::Timestamp};

/// A user review of a single theme.
///
/// Reviews are immutable after creation; deletion is the only update
/// operation. The nickname is free text, not a verified identity, and
/// the same nickname may review the same theme more than once.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: Id,
    pub theme_id: Id,
    pub nickname: String,
    pub scores: ScoreProfile,
    pub comment: String,
    pub created_at: Timestamp,
}
