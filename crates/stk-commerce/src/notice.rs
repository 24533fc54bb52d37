//! Transient user-facing notices.

use crate::error::ShopError;
use serde::Serialize;
use std::fmt;

/// Notice severity, which picks the toast colour and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Error => "error",
            NoticeLevel::Info => "info",
        }
    }
}

/// A message for the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }
}

impl From<&ShopError> for Notice {
    fn from(err: &ShopError) -> Self {
        Notice::error(err.to_string())
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level.as_str(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_error() {
        let notice = Notice::from(&ShopError::EmptyCart);
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Your cart is empty!");
        assert_eq!(notice.to_string(), "[error] Your cart is empty!");
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(Notice::info("Redirecting to checkout...")).unwrap();
        assert_eq!(json["level"], "info");
    }
}
