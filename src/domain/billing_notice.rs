use serde_json::Value;

/// One failed-payment event, validated and ready to render.
/// Never persisted: built from the request body, dropped with the request.
#[derive(Debug, Clone)]
pub struct BillingNotice {
    pub name: String,
    pub amount: String,
    pub invoice_id: String,
    pub due_date: String,
    pub payment_link: String,
    pub to_email: String,
}

impl BillingNotice {
    /// A field counts as missing when it is absent, not a JSON string, or
    /// the empty string. All missing fields fold into one aggregate error.
    pub fn parse(body: &serde_json::Map<String, Value>) -> Result<BillingNotice, String> {
        let mut missing = Vec::new();
        let mut field = |key: &'static str| match body.get(key).and_then(Value::as_str) {
            Some(value) if !value.is_empty() => value.to_owned(),
            _ => {
                missing.push(key);
                String::new()
            }
        };

        let name = field("name");
        let amount = field("amount");
        let invoice_id = field("invoiceId");
        let due_date = field("dueDate");
        let payment_link = field("paymentLink");
        let to_email = field("toEmail");

        if !missing.is_empty() {
            return Err(format!("missing or empty fields: {}", missing.join(", ")));
        }

        Ok(BillingNotice {
            name,
            amount,
            invoice_id,
            due_date,
            payment_link,
            to_email,
        })
    }

    /// Subject line carries the literal invoice id, unescaped.
    pub fn subject(&self) -> String {
        format!("Payment Failed - Invoice #{}", self.invoice_id)
    }
}
