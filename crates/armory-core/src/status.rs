//! Status and confirmation messages for operation feedback.

use std::fmt;

use serde::Serialize;

/// Outcome of an operation that has no resource to return, such as a delete.
///
/// Serializes as `{"success": true, "msg": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationStatus {
    pub success: bool,
    pub msg: String,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(msg: impl Into<String>) -> Self {
        Self {
            success: true,
            msg: msg.into(),
        }
    }

    /// Confirmation for a deleted resource, e.g. "Weapon deleted successfully.".
    pub fn deleted(label: &str) -> Self {
        Self::success(format!("{label} deleted successfully."))
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.msg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::ResourceKind;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Operation completed");
        assert_eq!(format!("{success}"), "Success: Operation completed");

        let failure = OperationStatus {
            success: false,
            msg: "Operation failed".to_string(),
        };
        assert!(format!("{failure}").starts_with("Error:"));
    }

    #[test]
    fn test_deleted_status_json() {
        let status = OperationStatus::deleted(ResourceKind::CombatArt.label());
        assert_eq!(
            serde_json::to_value(&status).unwrap(),
            serde_json::json!({"success": true, "msg": "Combat art deleted successfully."})
        );
    }
}
