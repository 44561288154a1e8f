//! Request handlers and their JSON response bodies.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use luach_calendar::{GregorianDate, HebrewDate};
use luach_catalog::ProductRecord;
use luach_parasha::ParashaEntry;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Banner served at `/`.
pub const BANNER: &str = "API rest - produtos kosher em fortaleza";

/// Optional `?date=YYYY-MM-DD` override for the date-based routes.
#[derive(Debug, Default, Deserialize)]
pub struct DateQuery {
    date: Option<String>,
}

/// Hebrew half of the `/api/date` body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HebrewDateBody {
    year: i32,
    month: u8,
    day: u8,
    month_name: &'static str,
}

impl From<HebrewDate> for HebrewDateBody {
    fn from(date: HebrewDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            month_name: date.month_name(),
        }
    }
}

/// Body of `/api/date`.
#[derive(Debug, Serialize)]
pub struct DateBody {
    gregorian: String,
    hebrew: HebrewDateBody,
}

/// Body of `/api/parashat`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParashaBody {
    hebrew_name: String,
    transliterated_name: String,
}

impl From<ParashaEntry> for ParashaBody {
    fn from(entry: ParashaEntry) -> Self {
        Self {
            hebrew_name: entry.hebrew_name,
            transliterated_name: entry.transliterated_name,
        }
    }
}

/// Resolves the request date: the query override if present, else the clock.
///
/// A query string that does not deserialize, such as a repeated `date`, is
/// reported as [`ApiError::InvalidDate`] rather than axum's plain-text 400.
fn resolve_date(
    state: &AppState,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Result<GregorianDate, ApiError> {
    let Query(query) = query?;
    match query.date {
        Some(raw) => Ok(raw.parse::<GregorianDate>()?),
        None => Ok((state.clock)()?),
    }
}

/// `GET /`: plain-text banner.
pub async fn homepage_handler() -> &'static str {
    BANNER
}

/// `GET /api/produtos`: the whole catalogue.
pub async fn products_handler(State(state): State<Arc<AppState>>) -> Json<Vec<ProductRecord>> {
    Json(state.catalog.records().to_vec())
}

/// `GET /api/date`: the requested day in both calendars.
pub async fn date_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Result<Json<DateBody>, ApiError> {
    let date = resolve_date(&state, query)?;
    let hebrew = HebrewDate::from_gregorian(date);
    debug!(%date, %hebrew, "converted date");

    Ok(Json(DateBody {
        gregorian: date.to_string(),
        hebrew: hebrew.into(),
    }))
}

/// `GET /api/parashat`: the reading for the week of the requested day.
pub async fn parashat_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Result<Json<ParashaBody>, ApiError> {
    let date = resolve_date(&state, query)?;
    let entry = state.scheduler.current_parasha(date)?;
    Ok(Json(entry.into()))
}
