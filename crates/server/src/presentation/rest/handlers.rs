use axum::{
    Json,
    extract::{Query, State},
};
use log::{debug, info};
use meridian_registry::MeetingWindow;
use std::sync::Arc;

use crate::presentation::rest::{ApiError, dto::*};

use super::AppState;

/// Engine indices are unsigned; a negative request index never resolves
fn resolve_index(raw: i64) -> Option<usize> {
    usize::try_from(raw).ok()
}

/// GET /api/clocks
pub async fn all_clocks(State(state): State<Arc<AppState>>) -> Json<ClocksResponse> {
    let timestamp = state.timestamp();
    let ring = state.ring.read();

    Json(ClocksResponse {
        clocks: ring.all_snapshots(),
        theme: ring.dominant_theme(),
        timestamp,
    })
}

/// GET /api/clock/current
pub async fn current_clock(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ClockViewResponse>, ApiError> {
    let timestamp = state.timestamp();
    let ring = state.ring.read();
    let cursor = state.cursor.lock();

    let record = cursor.current(&ring).ok_or_else(ApiError::no_clocks)?;
    Ok(Json(ClockViewResponse::new(
        record,
        cursor.index(),
        ring.len(),
        None,
        timestamp,
    )))
}

/// GET /api/clock/next
pub async fn next_clock(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ClockViewResponse>, ApiError> {
    let timestamp = state.timestamp();
    let ring = state.ring.read();
    let mut cursor = state.cursor.lock();

    let record = cursor.step_next(&ring).ok_or_else(ApiError::no_clocks)?;
    Ok(Json(ClockViewResponse::new(
        record,
        cursor.index(),
        ring.len(),
        Some(Direction::Next),
        timestamp,
    )))
}

/// GET /api/clock/previous
pub async fn previous_clock(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ClockViewResponse>, ApiError> {
    let timestamp = state.timestamp();
    let ring = state.ring.read();
    let mut cursor = state.cursor.lock();

    let record = cursor
        .step_previous(&ring)
        .ok_or_else(ApiError::no_clocks)?;
    Ok(Json(ClockViewResponse::new(
        record,
        cursor.index(),
        ring.len(),
        Some(Direction::Previous),
        timestamp,
    )))
}

/// POST /api/clock/update-time
pub async fn update_time(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateTimeRequest>,
) -> Result<Json<UpdateTimeResponse>, ApiError> {
    let index = match req.index {
        Some(raw) => resolve_index(raw).ok_or_else(ApiError::invalid_index)?,
        None => state.cursor.lock().index(),
    };

    let mut ring = state.ring.write();
    let record = ring.at_mut(index).ok_or_else(ApiError::invalid_index)?;
    record.set_offset(req.hours, req.minutes);

    let message = format!("Time updated for {}", record.city_name());
    Ok(Json(UpdateTimeResponse::new(record, message)))
}

/// POST /api/clock/reset-time
pub async fn reset_time(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ResetTimeRequest>,
) -> Result<Json<UpdateTimeResponse>, ApiError> {
    let index = match req.index {
        Some(raw) => resolve_index(raw).ok_or_else(ApiError::invalid_index)?,
        None => state.cursor.lock().index(),
    };

    let mut ring = state.ring.write();
    let record = ring.at_mut(index).ok_or_else(ApiError::invalid_index)?;
    record.reset_offset();

    let message = format!("Time reset for {}", record.city_name());
    Ok(Json(UpdateTimeResponse::new(record, message)))
}

/// GET /api/compare
pub async fn compare(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CompareQuery>,
) -> Result<Json<CompareResponse>, ApiError> {
    let (Some(first), Some(second)) = (resolve_index(query.clock1), resolve_index(query.clock2))
    else {
        return Err(ApiError::invalid_indices());
    };

    state
        .ring
        .read()
        .difference(first, second)
        .map(Json)
        .ok_or_else(ApiError::invalid_indices)
}

/// GET /api/meeting-times
pub async fn meeting_times(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MeetingQuery>,
) -> Json<MeetingTimesResponse> {
    let window = MeetingWindow::new(query.start, query.end);
    let optimal_times = state.ring.read().optimal_meeting_times(window);

    Json(MeetingTimesResponse {
        total_options: optimal_times.len(),
        optimal_times,
    })
}

/// GET /api/structure
pub async fn structure(State(state): State<Arc<AppState>>) -> Json<StructureResponse> {
    let ring = state.ring.read();
    Json(StructureResponse {
        structure: ring.structure_dump(),
        total_nodes: ring.len(),
        data_structure: "Doubly Circular Linked List",
    })
}

/// GET /api/convert
pub async fn convert(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConvertQuery>,
) -> Result<Json<ConvertResponse>, ApiError> {
    let (Some(from), Some(to)) = (resolve_index(query.from), resolve_index(query.to)) else {
        return Err(ApiError::invalid_indices());
    };
    let (Ok(hour), Ok(minute)) = (u32::try_from(query.hour), u32::try_from(query.minute)) else {
        return Err(ApiError::bad_request(format!(
            "Invalid time {}:{:02}",
            query.hour, query.minute
        )));
    };

    debug!("Convert {}:{:02} from {} to {}", hour, minute, from, to);
    let conversion = state.ring.read().convert(from, to, hour, minute)?;
    info!(
        "Converted {} {} -> {} {}",
        conversion.from_city, conversion.source_time, conversion.to_city, conversion.target_time
    );
    Ok(Json(conversion))
}
