//! Airtable REST Client
//!
//! The only layer that talks to the tabular backend. Responsible for request
//! shaping (sort/filter/limit parameters), field sanitization, and mapping
//! transport failures onto the [`ApiError`] taxonomy. Raw JS values never
//! leave this module.

use serde::Deserialize;
use serde_json::{Map, Value};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::config;
use crate::error::{ApiError, ApiResult};
use crate::models::{ActionStatus, AuditItem, FunctionScore, GlobalScore, Kpi};
use crate::sanitize;

const SCORE_FIELD: &str = "Score_Global_Sur_10";

const AUTH_MESSAGE: &str = "Invalid Airtable API key. Please check your configuration.";

/// One row of a table response: backend-assigned id plus an untyped field map.
#[derive(Debug, Clone, Deserialize)]
pub struct AirtableRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

/// Table response envelope. A missing `records` array is an empty result,
/// not an error.
#[derive(Debug, Deserialize)]
struct RecordsResponse {
    #[serde(default)]
    records: Vec<AirtableRecord>,
}

/// Transport-level failure, before per-operation message mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RequestError {
    Unauthorized,
    NotFound,
    Failed(String),
}

/// Map a transport failure onto the domain taxonomy, with per-operation
/// messages for the 404 and fallback cases.
fn classify(err: RequestError, not_found: &str, fallback: &str) -> ApiError {
    match err {
        RequestError::Unauthorized => ApiError::Authentication(AUTH_MESSAGE.to_string()),
        RequestError::NotFound => ApiError::NotFound(not_found.to_string()),
        RequestError::Failed(_) => ApiError::Transport(fallback.to_string()),
    }
}

// ========================
// Request plumbing
// ========================

fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

fn table_url(table: &str, params: &[(&str, &str)]) -> String {
    let base = format!("{}/{}", config::base_url(), table);
    if params.is_empty() {
        return base;
    }
    let query: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
        .collect();
    format!("{}?{}", base, query.join("&"))
}

fn js_detail(err: JsValue) -> RequestError {
    RequestError::Failed(format!("{:?}", err))
}

/// Dispatch a request and translate the HTTP status. Non-401/404 failures
/// are logged with their detail before being collapsed to `Failed`.
async fn send(request: Request) -> Result<Response, RequestError> {
    let window =
        web_sys::window().ok_or_else(|| RequestError::Failed("no window object".to_string()))?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_detail)?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| RequestError::Failed("unexpected fetch return value".to_string()))?;

    match response.status() {
        401 => Err(RequestError::Unauthorized),
        404 => Err(RequestError::NotFound),
        status if !response.ok() => {
            web_sys::console::error_1(&format!("Airtable API error: HTTP {}", status).into());
            Err(RequestError::Failed(format!("HTTP {}", status)))
        }
        _ => Ok(response),
    }
}

async fn get_records(table: &str, params: &[(&str, &str)]) -> Result<Vec<AirtableRecord>, RequestError> {
    let init = RequestInit::new();
    init.set_method("GET");
    let request =
        Request::new_with_str_and_init(&table_url(table, params), &init).map_err(js_detail)?;
    request
        .headers()
        .set("Authorization", &format!("Bearer {}", config::AIRTABLE_API_KEY))
        .map_err(js_detail)?;

    let response = send(request).await?;
    let json = JsFuture::from(response.json().map_err(js_detail)?)
        .await
        .map_err(js_detail)?;
    let parsed: RecordsResponse = serde_wasm_bindgen::from_value(json)
        .map_err(|err| RequestError::Failed(err.to_string()))?;
    Ok(parsed.records)
}

async fn patch_record(table: &str, record_id: &str, body: &str) -> Result<(), RequestError> {
    let init = RequestInit::new();
    init.set_method("PATCH");
    init.set_body(&JsValue::from_str(body));
    let url = format!("{}/{}/{}", config::base_url(), table, record_id);
    let request = Request::new_with_str_and_init(&url, &init).map_err(js_detail)?;
    let headers = request.headers();
    headers
        .set("Authorization", &format!("Bearer {}", config::AIRTABLE_API_KEY))
        .map_err(js_detail)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_detail)?;

    send(request).await?;
    Ok(())
}

// ========================
// Record -> entity mapping
// ========================

fn global_score_from(records: &[AirtableRecord]) -> ApiResult<GlobalScore> {
    let record = records
        .first()
        .ok_or_else(|| ApiError::NotFound("No global score data found".to_string()))?;
    let value = record.fields.get(SCORE_FIELD).ok_or_else(|| {
        ApiError::Validation(format!(
            "{} field not found in GLOBAL_SCORE table",
            SCORE_FIELD
        ))
    })?;
    Ok(GlobalScore {
        score: sanitize::number(Some(value)),
    })
}

fn function_score_from(record: &AirtableRecord) -> FunctionScore {
    let f = &record.fields;
    FunctionScore {
        name: sanitize::string(f.get("Name")),
        final_score: sanitize::number(f.get("Score_Final_Fonction")),
        total_kpis: sanitize::number(f.get("Nbr_KPIs")) as u32,
        alert_kpis: sanitize::number(f.get("Nbr_KPIs_Alert")) as u32,
    }
}

fn kpi_from(record: &AirtableRecord) -> Kpi {
    let f = &record.fields;
    Kpi {
        id: record.id.clone(),
        name: sanitize::string(f.get("Nom_KPI")),
        kpi_type: sanitize::string(f.get("Type")),
        current_value: sanitize::number(f.get("Valeur_Actuelle")),
        final_score: sanitize::number(f.get("Score_KPI_Final")),
        status: sanitize::string_or(f.get("Statut"), "OK"),
        function_label: sanitize::string_or(f.get("Fonctions_Readable"), "N/A"),
    }
}

fn audit_item_from(record: &AirtableRecord) -> AuditItem {
    let f = &record.fields;
    AuditItem {
        id: record.id.clone(),
        name: sanitize::string(f.get("Item_Name")),
        audit_flag: sanitize::string(f.get("KPIs_Audit")),
        function_name: sanitize::string(f.get("Fonction_Name")),
        problem_name: sanitize::string(f.get("Problems_Name")),
        sub_problem_name: sanitize::string(f.get("Sub_Problems_Name")),
        category_name: sanitize::string(f.get("Categorie_Problems_Name")),
        status: ActionStatus::from_label(&sanitize::string_or(f.get("Status"), "Not Started")),
    }
}

// ========================
// Public operations
// ========================

/// Fetch the single aggregate score, server-sorted so the first record is
/// the highest one.
pub async fn fetch_global_score() -> ApiResult<GlobalScore> {
    let records = get_records(
        "GLOBAL_SCORE",
        &[
            ("maxRecords", "1"),
            ("sort[0][field]", SCORE_FIELD),
            ("sort[0][direction]", "desc"),
        ],
    )
    .await
    .map_err(|err| {
        classify(
            err,
            "Global Score table not found. Please check your Airtable configuration.",
            "Failed to fetch global score. Please ensure the GLOBAL_SCORE table exists with a Score_Global_Sur_10 field.",
        )
    })?;
    global_score_from(&records)
}

/// Fetch all per-function scores, sorted by name. An empty table is an
/// empty list, not an error.
pub async fn fetch_function_scores() -> ApiResult<Vec<FunctionScore>> {
    let records = get_records(
        "Score_Fonction",
        &[("sort[0][field]", "Name"), ("sort[0][direction]", "asc")],
    )
    .await
    .map_err(|err| {
        classify(
            err,
            "Function Scores table not found. Please check your Airtable configuration.",
            "Failed to fetch function scores",
        )
    })?;
    Ok(records.iter().map(function_score_from).collect())
}

/// Fetch all KPIs, sorted by (type, name).
pub async fn fetch_kpis() -> ApiResult<Vec<Kpi>> {
    let records = get_records(
        "KPIs",
        &[
            ("sort[0][field]", "Type"),
            ("sort[0][direction]", "asc"),
            ("sort[1][field]", "Nom_KPI"),
            ("sort[1][direction]", "asc"),
        ],
    )
    .await
    .map_err(|err| {
        classify(
            err,
            "KPIs table not found. Please check your Airtable configuration.",
            "Failed to fetch KPIs",
        )
    })?;
    Ok(records.iter().map(kpi_from).collect())
}

/// Fetch audit items flagged `To Audit`, sorted by (function, problem).
pub async fn fetch_audit_items() -> ApiResult<Vec<AuditItem>> {
    let records = get_records(
        "Audit_Items",
        &[
            ("filterByFormula", "{KPIs_Audit} = 'To Audit'"),
            ("sort[0][field]", "Fonction_Name"),
            ("sort[0][direction]", "asc"),
            ("sort[1][field]", "Problems_Name"),
            ("sort[1][direction]", "asc"),
        ],
    )
    .await
    .map_err(|err| {
        classify(
            err,
            "Audit Items table not found. Please check your Airtable configuration.",
            "Failed to fetch audit items",
        )
    })?;
    Ok(records.iter().map(audit_item_from).collect())
}

/// Partial update of exactly the `Status` field on one audit item.
pub async fn update_audit_item_status(item_id: &str, status: ActionStatus) -> ApiResult<()> {
    let body = serde_json::json!({ "fields": { "Status": status.label() } }).to_string();
    patch_record("Audit_Items", item_id, &body)
        .await
        .map_err(|err| {
            classify(
                err,
                "Audit item not found",
                "Failed to update audit item status",
            )
        })
}
