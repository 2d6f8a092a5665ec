//! Request types for the Roster Ranking Engine API.
//!
//! `/average` takes a bare `StudentScore`; `/rank` takes a [`RankRequest`].

use serde::{Deserialize, Serialize};

use crate::models::RosterRecord;

/// Request body for the `/rank` endpoint.
///
/// Holds one class+subject roster. The `alunos` alias accepts the roster
/// envelope returned by the upstream grades API unchanged. Each element is
/// kept raw, so one malformed record never rejects the whole roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankRequest {
    /// The students of the roster, in roster order.
    #[serde(alias = "alunos")]
    pub students: Vec<RosterRecord>,
}
