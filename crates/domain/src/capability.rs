use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sitecrew_core::AppError;

/// Capability flags granted to roles by the access registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Grants every capability; short-circuits all module checks.
    FullAccess,
    /// Allows managing user accounts and role assignments.
    ManageUsers,
    /// Allows creating and editing projects.
    ManageProjects,
    /// Allows creating and assigning tasks.
    AssignTasks,
    /// Allows reading progress and financial reports.
    ViewReports,
    /// Allows approving budgets and purchase orders.
    ApproveBudgets,
    /// Allows managing vendor records.
    ManageVendors,
    /// Allows submitting invoices for payment.
    SubmitInvoices,
    /// Allows uploading site documents and drawings.
    UploadDocuments,
    /// Allows recording crew attendance.
    RecordAttendance,
    /// Allows reserving and operating site equipment.
    OperateEquipment,
    /// Allows filing incident reports.
    ReportIncidents,
    /// Allows managing site safety programs.
    ManageSafety,
    /// Allows performing quality inspections.
    InspectQuality,
    /// Allows raising material requests.
    RequestMaterials,
    /// Allows posting site-wide communications.
    SendCommunications,
}

impl Capability {
    /// Returns a stable storage value for this capability.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullAccess => "full_access",
            Self::ManageUsers => "manage_users",
            Self::ManageProjects => "manage_projects",
            Self::AssignTasks => "assign_tasks",
            Self::ViewReports => "view_reports",
            Self::ApproveBudgets => "approve_budgets",
            Self::ManageVendors => "manage_vendors",
            Self::SubmitInvoices => "submit_invoices",
            Self::UploadDocuments => "upload_documents",
            Self::RecordAttendance => "record_attendance",
            Self::OperateEquipment => "operate_equipment",
            Self::ReportIncidents => "report_incidents",
            Self::ManageSafety => "manage_safety",
            Self::InspectQuality => "inspect_quality",
            Self::RequestMaterials => "request_materials",
            Self::SendCommunications => "send_communications",
        }
    }
}

impl FromStr for Capability {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "full_access" => Ok(Self::FullAccess),
            "manage_users" => Ok(Self::ManageUsers),
            "manage_projects" => Ok(Self::ManageProjects),
            "assign_tasks" => Ok(Self::AssignTasks),
            "view_reports" => Ok(Self::ViewReports),
            "approve_budgets" => Ok(Self::ApproveBudgets),
            "manage_vendors" => Ok(Self::ManageVendors),
            "submit_invoices" => Ok(Self::SubmitInvoices),
            "upload_documents" => Ok(Self::UploadDocuments),
            "record_attendance" => Ok(Self::RecordAttendance),
            "operate_equipment" => Ok(Self::OperateEquipment),
            "report_incidents" => Ok(Self::ReportIncidents),
            "manage_safety" => Ok(Self::ManageSafety),
            "inspect_quality" => Ok(Self::InspectQuality),
            "request_materials" => Ok(Self::RequestMaterials),
            "send_communications" => Ok(Self::SendCommunications),
            _ => Err(AppError::Validation(format!(
                "unknown capability value '{value}'"
            ))),
        }
    }
}
