use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sitecrew_core::AppError;

use crate::Capability;

/// Navigable feature modules of the application.
///
/// A module is accessible when the role holds at least one of the
/// capabilities required by that module (logical OR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppModule {
    /// Budget and financial reporting screens.
    BudgetFinancials,
    /// Invoice submission and review.
    Invoices,
    /// Site documents and drawings.
    Documents,
    /// Vendor directory and onboarding.
    Vendors,
    /// Purchase order management.
    PurchaseOrders,
    /// Crew attendance tracking.
    Attendance,
    /// Equipment reservation and logs.
    Equipment,
    /// Incident reporting.
    Incidents,
    /// Site-wide announcements and messages.
    Communications,
    /// Material request workflow.
    MaterialRequests,
    /// Quality inspection checklists.
    QualityInspections,
    /// Project overview and planning.
    Projects,
    /// Task boards and assignments.
    Tasks,
    /// User and role administration.
    UserDirectory,
}

impl AppModule {
    /// Returns all known modules.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[AppModule] = &[
            AppModule::BudgetFinancials,
            AppModule::Invoices,
            AppModule::Documents,
            AppModule::Vendors,
            AppModule::PurchaseOrders,
            AppModule::Attendance,
            AppModule::Equipment,
            AppModule::Incidents,
            AppModule::Communications,
            AppModule::MaterialRequests,
            AppModule::QualityInspections,
            AppModule::Projects,
            AppModule::Tasks,
            AppModule::UserDirectory,
        ];

        ALL
    }

    /// Returns the module name used by navigation configuration.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BudgetFinancials => "BudgetFinancials",
            Self::Invoices => "Invoices",
            Self::Documents => "Documents",
            Self::Vendors => "Vendors",
            Self::PurchaseOrders => "PurchaseOrders",
            Self::Attendance => "Attendance",
            Self::Equipment => "Equipment",
            Self::Incidents => "Incidents",
            Self::Communications => "Communications",
            Self::MaterialRequests => "MaterialRequests",
            Self::QualityInspections => "QualityInspections",
            Self::Projects => "Projects",
            Self::Tasks => "Tasks",
            Self::UserDirectory => "UserDirectory",
        }
    }

    /// Returns the capabilities that unlock this module, any one sufficing.
    #[must_use]
    pub fn required_capabilities(&self) -> &'static [Capability] {
        match self {
            Self::BudgetFinancials => &[Capability::ApproveBudgets],
            Self::Invoices => &[Capability::SubmitInvoices, Capability::ApproveBudgets],
            Self::Documents => &[Capability::UploadDocuments],
            Self::Vendors => &[Capability::ManageVendors],
            Self::PurchaseOrders => &[Capability::ApproveBudgets, Capability::ManageVendors],
            Self::Attendance => &[Capability::RecordAttendance],
            Self::Equipment => &[Capability::OperateEquipment],
            Self::Incidents => &[Capability::ReportIncidents, Capability::ManageSafety],
            Self::Communications => &[Capability::SendCommunications],
            Self::MaterialRequests => &[Capability::RequestMaterials],
            Self::QualityInspections => &[Capability::InspectQuality],
            Self::Projects => &[Capability::ManageProjects, Capability::ViewReports],
            Self::Tasks => &[Capability::AssignTasks],
            Self::UserDirectory => &[Capability::ManageUsers],
        }
    }
}

impl FromStr for AppModule {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        AppModule::all()
            .iter()
            .find(|module| module.as_str() == value)
            .copied()
            .ok_or_else(|| AppError::Validation(format!("unknown module name '{value}'")))
    }
}
