use std::str::FromStr;

use sitecrew_core::AppError;

/// Address book of backend REST collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// `users/` collection.
    Users,
    /// `projects/` collection.
    Projects,
    /// `tasks/` collection.
    Tasks,
    /// `documents/` collection.
    Documents,
    /// `vendors/` collection.
    Vendors,
    /// `purchaseorders/` collection.
    PurchaseOrders,
    /// `budgets/` collection.
    Budgets,
    /// `attendance/` collection.
    Attendance,
    /// `invoices/` collection.
    Invoices,
    /// `equipment/` collection.
    Equipment,
    /// `incidents/` collection.
    Incidents,
    /// `communications/` collection.
    Communications,
    /// `material-requests/` collection.
    MaterialRequests,
    /// `quality-inspections/` collection.
    QualityInspections,
}

impl Resource {
    /// Returns all known resource collections.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Resource] = &[
            Resource::Users,
            Resource::Projects,
            Resource::Tasks,
            Resource::Documents,
            Resource::Vendors,
            Resource::PurchaseOrders,
            Resource::Budgets,
            Resource::Attendance,
            Resource::Invoices,
            Resource::Equipment,
            Resource::Incidents,
            Resource::Communications,
            Resource::MaterialRequests,
            Resource::QualityInspections,
        ];

        ALL
    }

    /// Returns the collection path relative to the API base URL.
    #[must_use]
    pub fn collection_path(&self) -> &'static str {
        match self {
            Self::Users => "users/",
            Self::Projects => "projects/",
            Self::Tasks => "tasks/",
            Self::Documents => "documents/",
            Self::Vendors => "vendors/",
            Self::PurchaseOrders => "purchaseorders/",
            Self::Budgets => "budgets/",
            Self::Attendance => "attendance/",
            Self::Invoices => "invoices/",
            Self::Equipment => "equipment/",
            Self::Incidents => "incidents/",
            Self::Communications => "communications/",
            Self::MaterialRequests => "material-requests/",
            Self::QualityInspections => "quality-inspections/",
        }
    }

    /// Returns the path of a single record in this collection.
    #[must_use]
    pub fn item_path(&self, id: i64) -> String {
        format!("{}{id}/", self.collection_path())
    }
}

impl FromStr for Resource {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim_end_matches('/');
        Resource::all()
            .iter()
            .find(|resource| resource.collection_path().trim_end_matches('/') == normalized)
            .copied()
            .ok_or_else(|| AppError::Validation(format!("unknown resource '{value}'")))
    }
}
