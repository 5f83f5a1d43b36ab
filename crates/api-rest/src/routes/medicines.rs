//! Medicine finder endpoints.
//!
//! The matcher itself is pure; these handlers own the process-wide recency
//! list and feed it on successful matches, mirroring how the finder UI kept
//! its own recent-search chips.

use crate::wire::{ListSymptomsRes, RecentSearchesRes, SearchMedicinesReq, SearchMedicinesRes, SymptomMatch};
use crate::AppState;
use axum::extract::State;
use axum::response::Json;
use hms_core::match_symptoms;

#[utoipa::path(
    post,
    path = "/medicines/search",
    request_body = SearchMedicinesReq,
    responses(
        (status = 200, description = "Matched symptom records, empty when nothing is recognised", body = SearchMedicinesRes)
    )
)]
/// Matches free text against the symptom table.
///
/// An empty result is the normal "no known condition recognised" outcome,
/// not an error. On a successful match the first matched symptom name is
/// pushed onto the recency list.
pub async fn search_medicines(
    State(state): State<AppState>,
    Json(req): Json<SearchMedicinesReq>,
) -> Json<SearchMedicinesRes> {
    let table = state.cfg.symptom_table();
    let hits = match_symptoms(&req.text, table);

    if let Some(first) = hits.first() {
        let mut recent = state
            .recent
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        recent.record(&first.symptom);
    }

    let data: Vec<SymptomMatch> = hits.into_iter().map(SymptomMatch::from).collect();
    Json(SearchMedicinesRes {
        success: true,
        count: data.len(),
        data,
    })
}

#[utoipa::path(
    get,
    path = "/medicines/recent",
    responses(
        (status = 200, description = "Recently matched symptom names, most recent first", body = RecentSearchesRes)
    )
)]
/// Returns the recency list of matched symptom names.
pub async fn recent_searches(State(state): State<AppState>) -> Json<RecentSearchesRes> {
    let data = {
        let recent = state
            .recent
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        recent.names().to_vec()
    };
    Json(RecentSearchesRes {
        success: true,
        data,
    })
}

#[utoipa::path(
    get,
    path = "/medicines/symptoms",
    responses(
        (status = 200, description = "The full symptom table", body = ListSymptomsRes)
    )
)]
/// Lists the full symptom reference table.
pub async fn list_symptoms(State(state): State<AppState>) -> Json<ListSymptomsRes> {
    let data: Vec<SymptomMatch> = state
        .cfg
        .symptom_table()
        .iter()
        .map(SymptomMatch::from)
        .collect();
    Json(ListSymptomsRes {
        success: true,
        count: data.len(),
        data,
    })
}
