mod billing_notice;
mod sender_email;

pub use billing_notice::BillingNotice;
pub use sender_email::SenderEmail;
