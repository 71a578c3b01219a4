//! Key/value setting entity

/// Key of the flag recording that the introduction channel was scanned once
pub const SCAN_COMPLETED_KEY: &str = "scan_completed";

/// A stored setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    pub key: String,
    pub value: Option<String>,
}

impl Setting {
    /// Interpret the value as a boolean flag (`"true"`)
    #[inline]
    pub fn is_true(&self) -> bool {
        self.value.as_deref() == Some("true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_true() {
        let mut setting = Setting {
            key: SCAN_COMPLETED_KEY.to_string(),
            value: Some("false".to_string()),
        };
        assert!(!setting.is_true());

        setting.value = Some("true".to_string());
        assert!(setting.is_true());

        setting.value = None;
        assert!(!setting.is_true());
    }
}
