//! Pass-through resource records.
//!
//! These mirror what the remote backend returns. The backend owns validation
//! and business rules; no local invariants are enforced beyond field
//! presence, so every optional field stays optional here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// User profile returned by `login/` and `users/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Backend identifier for the user.
    pub id: Option<i64>,
    /// Login email address.
    pub email: String,
    /// First name, when the backend has one.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name, when the backend has one.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Role identifier resolved against the access registry.
    pub role: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
}

impl UserProfile {
    /// Returns the name shown in headers, falling back to the email address.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.to_owned(),
            (None, Some(last)) => last.to_owned(),
            (None, None) => self.email.clone(),
        }
    }
}

/// Project record from `projects/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Backend identifier for the project.
    pub id: Option<i64>,
    /// Project name.
    pub name: String,
    /// Free-form location string.
    #[serde(default)]
    pub location: Option<String>,
    /// Backend status value, passed through untouched.
    #[serde(default)]
    pub status: Option<String>,
}

/// Task record from `tasks/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Backend identifier for the task.
    pub id: Option<i64>,
    /// Task title.
    pub title: String,
    /// Owning project identifier.
    #[serde(default)]
    pub project: Option<i64>,
    /// Assigned user identifier.
    #[serde(default)]
    pub assignee: Option<i64>,
    /// Backend status value, passed through untouched.
    #[serde(default)]
    pub status: Option<String>,
}

/// Document record from `documents/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Backend identifier for the document.
    pub id: Option<i64>,
    /// Document title.
    pub title: String,
    /// Owning project identifier.
    #[serde(default)]
    pub project: Option<i64>,
    /// Download URL provided by the backend.
    #[serde(default)]
    pub file_url: Option<String>,
}

/// Vendor record from `vendors/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorRecord {
    /// Backend identifier for the vendor.
    pub id: Option<i64>,
    /// Vendor company name.
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub contact_email: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Trade or service category.
    #[serde(default)]
    pub category: Option<String>,
}

/// Invoice record from `invoices/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// Backend identifier for the invoice.
    pub id: Option<i64>,
    /// Vendor-assigned invoice number.
    pub invoice_number: String,
    /// Issuing vendor identifier.
    #[serde(default)]
    pub vendor: Option<i64>,
    /// Billed project identifier.
    #[serde(default)]
    pub project: Option<i64>,
    /// Amount as the backend's decimal string.
    #[serde(default)]
    pub amount: Option<String>,
    /// Backend status value, passed through untouched.
    #[serde(default)]
    pub status: Option<String>,
    /// Remaining backend fields the app does not interpret.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}
