use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::models::{
	attempt::{AttemptStatus, UploadAttempt},
	response::InvoiceFields,
};

/// Shown wherever a value is missing from a response.
pub const PLACEHOLDER: &str = "—";

/// Keys whose presence marks a payload as invoice extraction output.
const INVOICE_MARKERS: [&str; 3] = ["invoice_id", "vendor_name", "customer_name"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
	Invoice,
	Generic,
}

/// Decide how a successful response should be displayed: invoice-shaped
/// payloads get the dedicated table, everything else the generic one.
pub fn classify(payload: &Value) -> RenderMode {
	match payload.as_object() {
		Some(map) if INVOICE_MARKERS.iter().any(|k| map.contains_key(*k)) => RenderMode::Invoice,
		_ => RenderMode::Generic,
	}
}

/// Project any JSON value to a display cell: null becomes the placeholder,
/// nested structures their JSON text, primitives their plain string form.
pub fn display_value(value: &Value) -> String {
	match value {
		Value::Null => PLACEHOLDER.to_string(),
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

/// Flatten a payload's top-level keys to display strings. Non-object
/// payloads flatten to nothing.
pub fn flatten(payload: &Value) -> BTreeMap<String, String> {
	let mut flat = BTreeMap::new();
	if let Some(map) = payload.as_object() {
		for (key, value) in map {
			flat.insert(key.clone(), display_value(value));
		}
	}
	flat
}

/// What the response section should render for the current history.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseView {
	/// No successful uploads yet.
	Empty,
	/// At least one payload is invoice-shaped; those attempts only.
	Invoice(Vec<InvoiceRow>),
	/// Generic key/value table over every successful upload.
	Generic(GenericTable),
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceRow {
	pub file_name: String,
	pub submitted_at: DateTime<Utc>,
	pub fields: InvoiceFields,
}

impl InvoiceRow {
	/// The nine invoice columns in display order, placeholder where absent.
	pub fn display_cells(&self) -> Vec<String> {
		let f = &self.fields;
		[
			&f.invoice_id,
			&f.vendor_name,
			&f.customer_name,
			&f.invoice_date,
			&f.due_date,
			&f.subtotal,
			&f.tax_total,
			&f.total,
			&f.currency,
		]
		.into_iter()
		.map(|v| v.clone().unwrap_or_else(|| PLACEHOLDER.to_string()))
		.collect()
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenericTable {
	/// Union of flattened keys across all successful attempts.
	pub columns: Vec<String>,
	pub rows: Vec<GenericRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenericRow {
	pub file_name: String,
	pub submitted_at: DateTime<Utc>,
	/// One cell per column, placeholder where the payload lacks the key.
	pub cells: Vec<String>,
}

/// Build the response section's view model from the attempt history.
pub fn build_view(attempts: &[UploadAttempt]) -> ResponseView {
	// 1. Only succeeded attempts carry a payload worth rendering.
	let mut succeeded: Vec<(&UploadAttempt, &Value)> = Vec::new();
	for attempt in attempts {
		if attempt.status == AttemptStatus::Succeeded {
			if let Some(payload) = attempt.response.as_ref() {
				succeeded.push((attempt, payload));
			}
		}
	}
	if succeeded.is_empty() {
		return ResponseView::Empty;
	}

	// 2. Invoice-shaped payloads take precedence over the generic table.
	let mut invoices = Vec::new();
	for &(attempt, payload) in &succeeded {
		if classify(payload) == RenderMode::Invoice {
			invoices.push(InvoiceRow {
				file_name: attempt.file_name.clone(),
				submitted_at: attempt.submitted_at,
				fields: InvoiceFields::from_payload(payload),
			});
		}
	}
	if !invoices.is_empty() {
		return ResponseView::Invoice(invoices);
	}

	// 3. Generic table: columns are the union of keys across every payload.
	let mut flats = Vec::with_capacity(succeeded.len());
	let mut column_set = BTreeSet::new();
	for &(_, payload) in &succeeded {
		let flat = flatten(payload);
		column_set.extend(flat.keys().cloned());
		flats.push(flat);
	}
	let columns: Vec<String> = column_set.into_iter().collect();

	let mut rows = Vec::with_capacity(succeeded.len());
	for (&(attempt, _), flat) in succeeded.iter().zip(&flats) {
		rows.push(GenericRow {
			file_name: attempt.file_name.clone(),
			submitted_at: attempt.submitted_at,
			cells: columns
				.iter()
				.map(|column| {
					flat.get(column)
						.cloned()
						.unwrap_or_else(|| PLACEHOLDER.to_string())
				})
				.collect(),
		});
	}

	ResponseView::Generic(GenericTable { columns, rows })
}
