use crate::domain::BillingNotice;
use htmlescape::{encode_attribute, encode_minimal};

const HEADING: &str = "Payment Failed";
const BUTTON_LABEL: &str = "Update Payment Method";
const SUPPORT_CONTACT: &str = "support@example.com";

/// The rendered email body: a preview line plus a sequence of blocks.
/// Text is entity-encoded only at serialization time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub preview: String,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(String),
    Paragraph(Vec<Inline>),
    Button { label: String, href: String },
    Divider,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
}

impl Document {
    pub fn to_html(&self) -> String {
        let mut html = String::from("<html><body>");
        // Inbox preview line, hidden from the rendered message.
        html.push_str(&format!(
            "<div style=\"display:none;overflow:hidden;max-height:0\">{}</div>",
            encode_minimal(&self.preview)
        ));
        for block in &self.blocks {
            match block {
                Block::Heading(text) => {
                    html.push_str(&format!("<h1>{}</h1>", encode_minimal(text)));
                }
                Block::Paragraph(inlines) => {
                    html.push_str("<p>");
                    for inline in inlines {
                        match inline {
                            Inline::Text(text) => html.push_str(&encode_minimal(text)),
                        }
                    }
                    html.push_str("</p>");
                }
                Block::Button { label, href } => {
                    html.push_str(&format!(
                        "<a href=\"{}\">{}</a>",
                        encode_attribute(href),
                        encode_minimal(label)
                    ));
                }
                Block::Divider => html.push_str("<hr/>"),
            }
        }
        html.push_str("</body></html>");
        html
    }
}

/// Render the payment-failure notification for a notice.
/// Pure: the same notice always produces the same document.
pub fn billing_failure(notice: &BillingNotice) -> Document {
    Document {
        preview: format!("Action Required: Your payment of {} failed", notice.amount),
        blocks: vec![
            Block::Heading(HEADING.into()),
            Block::Paragraph(vec![
                Inline::Text("Dear ".into()),
                Inline::Text(notice.name.clone()),
                Inline::Text(",".into()),
            ]),
            Block::Paragraph(vec![
                Inline::Text("We were unable to process your payment of ".into()),
                Inline::Text(notice.amount.clone()),
                Inline::Text(" for invoice #".into()),
                Inline::Text(notice.invoice_id.clone()),
                Inline::Text(
                    ". To ensure uninterrupted service, please update your payment method before "
                        .into(),
                ),
                Inline::Text(notice.due_date.clone()),
                Inline::Text(".".into()),
            ]),
            Block::Button {
                label: BUTTON_LABEL.into(),
                href: notice.payment_link.clone(),
            },
            Block::Divider,
            Block::Paragraph(vec![Inline::Text(format!(
                "If you believe this is an error or need assistance, \
                 please contact our support team at {}",
                SUPPORT_CONTACT
            ))]),
        ],
    }
}
