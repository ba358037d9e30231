//! Invoicing gateway: a capability with a mock and a live (Square) strategy.

use crate::config::{Config, SquareConfig};
use crate::core::codec::LabelCodec;
use crate::errors::{AppError, AppResult};
use crate::models::Label;
use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Result of a single create-invoice call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceResponse {
    pub success: bool,
    pub errors: Option<String>,
}

impl InvoiceResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            errors: None,
        }
    }

    pub fn failed(errors: impl Into<String>) -> Self {
        Self {
            success: false,
            errors: Some(errors.into()),
        }
    }
}

pub trait InvoiceGateway {
    fn name(&self) -> &'static str;

    fn create_invoice(&self, label: &Label, today: NaiveDate) -> InvoiceResponse;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayMode {
    Mock,
    Live,
}

impl GatewayMode {
    pub fn from_config(cfg: &Config) -> Self {
        if cfg.use_mock_gateway {
            GatewayMode::Mock
        } else {
            GatewayMode::Live
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GatewayMode::Mock => "mock",
            GatewayMode::Live => "live",
        }
    }
}

/// Pick the strategy for this run.
pub fn build_gateway(mode: GatewayMode, square: &SquareConfig) -> AppResult<Box<dyn InvoiceGateway>> {
    match mode {
        GatewayMode::Mock => Ok(Box::new(MockGateway)),
        GatewayMode::Live => Ok(Box::new(SquareGateway::new(square.clone())?)),
    }
}

/// Always succeeds, never touches the network.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockGateway;

impl InvoiceGateway for MockGateway {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn create_invoice(&self, label: &Label, today: NaiveDate) -> InvoiceResponse {
        info!(
            "[MOCK] invoice {} created for {}",
            invoice_number(label, today),
            label.restaurant
        );
        InvoiceResponse::ok()
    }
}

pub struct SquareGateway {
    client: Client,
    square: SquareConfig,
}

impl SquareGateway {
    pub fn new(square: SquareConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .user_agent(concat!("mushtrace/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Gateway(format!("cannot build HTTP client: {e}")))?;

        Ok(Self { client, square })
    }

    /// Request body for the invoices endpoint.
    pub fn invoice_body(&self, label: &Label, today: NaiveDate) -> Value {
        let due = today.format("%Y-%m-%d").to_string();
        let encoded = LabelCodec::render(label);

        json!({
            "idempotency_key": format!("{due}-{}", label.box_number),
            "invoice": {
                "location_id": self.square.location_id,
                "order_id": self.square.order_id,
                "primary_recipient": { "customer_id": self.square.customer_id },
                "payment_requests": [{
                    "request_type": "BALANCE",
                    "due_date": due,
                    "fixed_amount_requested_money": { "amount": 0, "currency": "USD" }
                }],
                "delivery_method": "EMAIL",
                "invoice_number": invoice_number(label, today),
                "title": "Mushroom Invoice",
                "description": format!("Invoice for {encoded} delivered to {}", label.restaurant)
            }
        })
    }
}

impl InvoiceGateway for SquareGateway {
    fn name(&self) -> &'static str {
        "square"
    }

    fn create_invoice(&self, label: &Label, today: NaiveDate) -> InvoiceResponse {
        let url = format!("{}/v2/invoices", self.square.base_url.trim_end_matches('/'));
        debug!("POST {url} for box {}", label.box_number);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.square.access_token)
            .json(&self.invoice_body(label, today))
            .send();

        match response {
            Ok(r) if r.status().is_success() => InvoiceResponse::ok(),
            Ok(r) => {
                let status = r.status();
                let body = r.text().unwrap_or_default();
                warn!("invoice rejected with {status}");
                InvoiceResponse::failed(extract_errors(&body).unwrap_or_else(|| format!("HTTP {status}")))
            }
            Err(e) => InvoiceResponse::failed(e.to_string()),
        }
    }
}

/// Square answers `{"errors": [{"code": ..., "detail": ...}]}` on failure.
fn extract_errors(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let errors = value.get("errors")?.as_array()?;
    let parts: Vec<String> = errors
        .iter()
        .map(|e| {
            let code = e.get("code").and_then(Value::as_str).unwrap_or("UNKNOWN");
            let detail = e.get("detail").and_then(Value::as_str).unwrap_or("");
            format!("{code}: {detail}")
        })
        .collect();
    (!parts.is_empty()).then(|| parts.join("; "))
}

pub fn invoice_number(label: &Label, today: NaiveDate) -> String {
    format!("INV-{}-{}", today.format("%Y-%m-%d"), label.box_number)
}

/// Per-record outcome of one invoicing run.
#[derive(Debug, Default)]
pub struct InvoiceBatch {
    pub invoiced: Vec<String>,
    pub failure: Option<(String, String)>,
    pub not_attempted: usize,
}

impl InvoiceBatch {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    pub fn into_result(self) -> AppResult<Vec<String>> {
        match self.failure {
            None => Ok(self.invoiced),
            Some((label, reason)) => Err(AppError::Gateway(format!(
                "invoice for '{label}' failed: {reason} ({} invoiced before the failure, {} not attempted)",
                self.invoiced.len(),
                self.not_attempted
            ))),
        }
    }
}

/// Create one invoice per label, in order, stopping at the first failure.
///
/// A label that does not decode counts as a failure.
pub fn submit_invoices<S: AsRef<str>>(
    gateway: &dyn InvoiceGateway,
    labels: &[S],
    today: NaiveDate,
) -> InvoiceBatch {
    let mut batch = InvoiceBatch::default();

    for (i, raw) in labels.iter().enumerate() {
        let raw = raw.as_ref();
        let response = match LabelCodec::decode(raw) {
            Ok(label) => gateway.create_invoice(&label, today),
            Err(e) => InvoiceResponse::failed(e.to_string()),
        };

        if response.success {
            batch.invoiced.push(raw.to_string());
            continue;
        }

        let reason = response
            .errors
            .unwrap_or_else(|| "gateway reported failure".to_string());
        batch.failure = Some((raw.to_string(), reason));
        batch.not_attempted = labels.len() - i - 1;
        break;
    }

    batch
}
