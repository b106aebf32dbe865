use serde::Serialize;
use serde_json::Value;

/// The named fields the invoice table shows. Every one is optional in the
/// payload; the webhook extracts whatever it can from the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceFields {
    pub invoice_id: Option<String>,
    pub vendor_name: Option<String>,
    pub customer_name: Option<String>,
    pub invoice_date: Option<String>,
    pub due_date: Option<String>,
    pub subtotal: Option<String>,
    pub tax_total: Option<String>,
    pub total: Option<String>,
    pub currency: Option<String>,
}

impl InvoiceFields {
    /// Pull the known fields out of an open-schema payload. Strings are taken
    /// verbatim; other non-null values keep their JSON text form.
    pub fn from_payload(payload: &Value) -> Self {
        let field = |key: &str| -> Option<String> {
            match payload.get(key) {
                None | Some(Value::Null) => None,
                Some(Value::String(s)) => Some(s.clone()),
                Some(other) => Some(other.to_string()),
            }
        };
        Self {
            invoice_id: field("invoice_id"),
            vendor_name: field("vendor_name"),
            customer_name: field("customer_name"),
            invoice_date: field("invoice_date"),
            due_date: field("due_date"),
            subtotal: field("subtotal"),
            tax_total: field("tax_total"),
            total: field("total"),
            currency: field("currency"),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn extracts_present_fields() {
        let payload = json!({
            "invoice_id": "INV-1",
            "vendor_name": "Acme GmbH",
            "total": "100"
        });
        let fields = InvoiceFields::from_payload(&payload);
        assert_eq!(fields.invoice_id.as_deref(), Some("INV-1"));
        assert_eq!(fields.vendor_name.as_deref(), Some("Acme GmbH"));
        assert_eq!(fields.total.as_deref(), Some("100"));
        assert_eq!(fields.customer_name, None);
        assert_eq!(fields.due_date, None);
    }

    #[test]
    fn non_string_values_keep_their_json_text() {
        let payload = json!({ "total": 100, "subtotal": 84.5 });
        let fields = InvoiceFields::from_payload(&payload);
        assert_eq!(fields.total.as_deref(), Some("100"));
        assert_eq!(fields.subtotal.as_deref(), Some("84.5"));
    }

    #[test]
    fn null_counts_as_absent() {
        let payload = json!({ "invoice_id": null });
        let fields = InvoiceFields::from_payload(&payload);
        assert_eq!(fields.invoice_id, None);
    }

    #[test]
    fn non_object_payload_yields_nothing() {
        let fields = InvoiceFields::from_payload(&json!(["a", "b"]));
        assert_eq!(fields, InvoiceFields::default());
    }
}
