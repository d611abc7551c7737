use validator::validate_email;

/// The configured sender address, validated once at startup.
#[derive(Debug, Clone)]
pub struct SenderEmail(String);

impl SenderEmail {
    pub fn parse(s: String) -> Result<SenderEmail, String> {
        if validate_email(&s) {
            Ok(Self(s))
        } else {
            Err(format!("{} is not a valid sender email address", s))
        }
    }
}

impl std::fmt::Display for SenderEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for SenderEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
