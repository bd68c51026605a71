//! Colour handlers.
//!
//! GET  /api/health              — liveness plus cache entry counts
//! GET  /api/colours             — id/name/description per colour
//! GET  /api/colours/options     — dropdown entries with placeholder
//! GET  /api/colours/checkboxes  — checkbox entries, comma-separated selection
//! GET  /api/colours/lookup      — reverse lookup by label or name
//! GET  /api/colours/form        — default form model and its option lists
//! POST /api/colours/form        — validate a submission, echo its labels

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::colours::{
    self, ColourInfo, ColourSelection, ColourSelectionForm, FieldOptions, SelectionDescriptions,
    UserColour, COLOUR_EMPTY_TEXT,
};
use crate::lookup::{self, CacheStats};
use crate::options::{self, SelectOption};

use super::error::AppError;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub cache: CacheStats,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        cache: lookup::cache_stats(),
    })
}

pub async fn list_colours() -> Json<Vec<ColourInfo>> {
    Json(colours::all_colours())
}

#[derive(Debug, Deserialize)]
pub struct OptionsQuery {
    pub selected: Option<String>,
    pub empty_text: Option<String>,
}

pub async fn colour_options(Query(query): Query<OptionsQuery>) -> Json<Vec<SelectOption>> {
    let empty_text = query.empty_text.as_deref().unwrap_or(COLOUR_EMPTY_TEXT);
    Json(options::to_select_list_with_empty::<UserColour>(
        empty_text,
        query.selected.as_deref(),
    ))
}

#[derive(Debug, Deserialize)]
pub struct CheckboxQuery {
    /// Comma-separated values or names, e.g. `1,SkyBlue`
    pub selected: Option<String>,
}

pub async fn colour_checkboxes(Query(query): Query<CheckboxQuery>) -> Json<Vec<SelectOption>> {
    let selected = query.selected.unwrap_or_default();
    let keys = selected.split(',').map(str::trim).filter(|s| !s.is_empty());
    Json(options::to_multi_select_list::<UserColour, _>(keys))
}

#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    #[serde(default)]
    pub label: String,
}

pub async fn lookup_colour(Query(query): Query<LookupQuery>) -> Result<Json<ColourInfo>, AppError> {
    let colour = lookup::enum_from_description::<UserColour>(&query.label)?;
    Ok(Json(ColourInfo::from(colour)))
}

#[derive(Debug, Serialize)]
pub struct FormView {
    pub model: ColourSelection,
    pub fields: Vec<FieldOptions>,
}

pub async fn colour_form() -> Json<FormView> {
    let model = ColourSelection::default_model();
    let fields = model.field_options(COLOUR_EMPTY_TEXT);
    Json(FormView { model, fields })
}

pub async fn submit_colour_form(
    Json(form): Json<ColourSelectionForm>,
) -> Result<Json<SelectionDescriptions>, AppError> {
    let selection = form.validate()?;
    let descriptions = selection.describe();
    tracing::info!(
        basic = %descriptions.basic_selected_colour,
        multiple = descriptions.multiple_colours.as_deref().unwrap_or(""),
        "colour selection submitted"
    );
    Ok(Json(descriptions))
}
