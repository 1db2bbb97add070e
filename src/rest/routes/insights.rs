// rest/routes/insights.rs — Insight synthesis routes.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::synth::BusinessQuery;
use crate::AppContext;

/// Fields are optional so that a missing key surfaces as our own 400
/// payload instead of an extractor rejection.
#[derive(Deserialize)]
pub struct BusinessDataRequest {
    pub name: Option<String>,
    pub location: Option<String>,
}

pub async fn business_data(
    State(ctx): State<AppContext>,
    Json(body): Json<BusinessDataRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let query = BusinessQuery::new(
        body.name.unwrap_or_default(),
        body.location.unwrap_or_default(),
    );

    match ctx.provider.fetch_insight(&query).await {
        Ok(insight) => Ok(Json(json!(insight))),
        Err(e) => Err(e.into_response()),
    }
}

#[derive(Deserialize)]
pub struct RegenerateParams {
    pub name: Option<String>,
    pub location: Option<String>,
}

pub async fn regenerate_headline(
    State(ctx): State<AppContext>,
    Query(params): Query<RegenerateParams>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let name = params.name.unwrap_or_default();
    let location = params.location.unwrap_or_default();

    match ctx.provider.regenerate_headline(&name, &location).await {
        Ok(headline) => Ok(Json(json!({ "headline": headline }))),
        Err(e) => Err(e.into_response()),
    }
}
