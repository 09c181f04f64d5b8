//! API request handlers

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use crate::batch::BatchRunner;
use crate::classifier::Classifier;
use crate::config::Config;
use crate::export::{organize_emails, save_csv};
use crate::ingest::load_directory;
use crate::report::Aggregator;
use crate::rules::RuleSet;

/// Shared application state
pub struct AppState {
    pub rules: RuleSet,
    pub config: Config,
}

/// API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(msg: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.to_string()),
        }
    }
}

/// Classify request body
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
}

/// Classify response
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub category: String,
    pub display_name: String,
    pub matched_terms: Vec<String>,
}

/// Process request body
#[derive(Debug, Deserialize)]
pub struct ProcessRequest {
    /// Directory of .txt email files; empty means the configured default.
    #[serde(default)]
    pub directory: String,
    /// Write a CSV report into the configured report directory.
    #[serde(default)]
    pub generate_report: bool,
    /// Copy emails into per-category folders.
    #[serde(default)]
    pub organize: bool,
}

/// Per-email decision in a process response
#[derive(Debug, Serialize)]
pub struct DecisionResponse {
    pub email_id: String,
    pub category: String,
    pub matched_terms: Vec<String>,
    pub preview: String,
}

/// Per-category row in a process response
#[derive(Debug, Serialize)]
pub struct ReportRowResponse {
    pub category: String,
    pub count: usize,
    pub percentage: f64,
}

/// Process response
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub batch_id: String,
    pub total: usize,
    pub uncategorized: usize,
    pub rows: Vec<ReportRowResponse>,
    pub decisions: Vec<DecisionResponse>,
    pub csv_file: Option<String>,
    pub organized: Option<usize>,
}

/// Health check
pub async fn health() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse::success("ok"))
}

/// Classify a single piece of text
pub async fn classify(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ClassifyRequest>,
) -> Json<ApiResponse<ClassifyResponse>> {
    let classification = Classifier::new(&state.rules).classify(&req.text);

    Json(ApiResponse::success(ClassifyResponse {
        category: classification.category.as_str().to_string(),
        display_name: classification.category.display_name().to_string(),
        matched_terms: classification.matched_terms,
    }))
}

/// Process a directory of emails: ingest, classify, aggregate, and
/// optionally export. Per-email problems never fail the request; only a
/// missing directory does.
pub async fn process(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ProcessRequest>,
) -> Json<ApiResponse<ProcessResponse>> {
    let directory = if req.directory.trim().is_empty() {
        state.config.ingest.email_dir.clone()
    } else {
        req.directory.clone()
    };

    let files = match load_directory(Path::new(&directory)) {
        Ok(files) => files,
        Err(e) => return Json(ApiResponse::error(&format!("Failed to read directory: {}", e))),
    };

    if files.is_empty() {
        return Json(ApiResponse::error(&format!(
            "No .txt files found in {}",
            directory
        )));
    }

    let batch_id = Utc::now().format("%Y%m%d_%H%M%S").to_string();

    let records: Vec<_> = files.iter().map(|f| f.record.clone()).collect();
    let results = BatchRunner::new(&state.rules).run(&records);
    let report = Aggregator::new(&state.rules).aggregate(&results, &batch_id);

    let decisions = files
        .iter()
        .zip(&results)
        .map(|(file, result)| DecisionResponse {
            email_id: result.email_id.clone(),
            category: result.category.as_str().to_string(),
            matched_terms: result.matched_terms.clone(),
            preview: file.preview.clone(),
        })
        .collect();

    let csv_file = if req.generate_report {
        match save_csv(&report, Path::new(&state.config.report.csv_dir)) {
            Ok(path) => Some(path.display().to_string()),
            Err(e) => return Json(ApiResponse::error(&format!("Failed to write CSV: {}", e))),
        }
    } else {
        None
    };

    let organized = if req.organize {
        let out_dir = Path::new(&state.config.report.organize_dir).join(&batch_id);
        match organize_emails(&files, &results, &out_dir) {
            Ok(count) => Some(count),
            Err(e) => {
                return Json(ApiResponse::error(&format!(
                    "Failed to organize emails: {}",
                    e
                )))
            }
        }
    } else {
        None
    };

    Json(ApiResponse::success(ProcessResponse {
        batch_id: report.batch_id.clone(),
        total: report.total,
        uncategorized: report.uncategorized,
        rows: report
            .rows
            .iter()
            .map(|row| ReportRowResponse {
                category: row.category.as_str().to_string(),
                count: row.count,
                percentage: row.percentage,
            })
            .collect(),
        decisions,
        csv_file,
        organized,
    }))
}
