use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sitecrew_core::AppError;

use crate::Capability;

/// Fixed categories of system users. Defined at compile time, never extended
/// at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Company administrator with unrestricted access.
    Admin,
    /// Plans projects, budgets and vendor relationships.
    ProjectManager,
    /// Oversees on-site technical execution.
    SiteEngineer,
    /// Leads a crew and tracks its attendance.
    Foreman,
    /// External contractor billing through the platform.
    Subcontractor,
    /// Crew member recording attendance and incidents.
    Worker,
    /// Runs the site safety program.
    SafetyOfficer,
    /// Performs quality inspections on delivered work.
    QualityInspector,
}

/// Display metadata shown next to a role in navigation and headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDisplay {
    /// Human-readable role label.
    pub label: &'static str,
    /// Icon glyph identifier used by the presentation layer.
    pub icon: &'static str,
}

impl Role {
    /// Returns a stable wire value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::ProjectManager => "project_manager",
            Self::SiteEngineer => "site_engineer",
            Self::Foreman => "foreman",
            Self::Subcontractor => "subcontractor",
            Self::Worker => "worker",
            Self::SafetyOfficer => "safety_officer",
            Self::QualityInspector => "quality_inspector",
        }
    }

    /// Returns all known roles.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[
            Role::Admin,
            Role::ProjectManager,
            Role::SiteEngineer,
            Role::Foreman,
            Role::Subcontractor,
            Role::Worker,
            Role::SafetyOfficer,
            Role::QualityInspector,
        ];

        ALL
    }

    /// Returns the capability flags held by this role.
    #[must_use]
    pub fn capabilities(&self) -> &'static [Capability] {
        match self {
            Self::Admin => &[Capability::FullAccess],
            Self::ProjectManager => &[
                Capability::ManageProjects,
                Capability::AssignTasks,
                Capability::ViewReports,
                Capability::ApproveBudgets,
                Capability::ManageVendors,
                Capability::UploadDocuments,
                Capability::SendCommunications,
            ],
            Self::SiteEngineer => &[
                Capability::AssignTasks,
                Capability::ViewReports,
                Capability::UploadDocuments,
                Capability::OperateEquipment,
                Capability::RequestMaterials,
            ],
            Self::Foreman => &[
                Capability::AssignTasks,
                Capability::RecordAttendance,
                Capability::RequestMaterials,
                Capability::ReportIncidents,
            ],
            Self::Subcontractor => &[
                Capability::SubmitInvoices,
                Capability::UploadDocuments,
                Capability::SendCommunications,
            ],
            Self::Worker => &[
                Capability::RecordAttendance,
                Capability::ReportIncidents,
                Capability::RequestMaterials,
            ],
            Self::SafetyOfficer => &[
                Capability::ManageSafety,
                Capability::ReportIncidents,
                Capability::ViewReports,
            ],
            Self::QualityInspector => &[
                Capability::InspectQuality,
                Capability::UploadDocuments,
                Capability::ViewReports,
            ],
        }
    }

    /// Returns the first screen opened after login for this role.
    #[must_use]
    pub fn dashboard_route(&self) -> &'static str {
        match self {
            Self::Admin => "AdminDashboard",
            Self::ProjectManager => "ProjectManagerDashboard",
            Self::SiteEngineer => "SiteEngineerDashboard",
            Self::Foreman => "ForemanDashboard",
            Self::Subcontractor => "SubcontractorDashboard",
            Self::Worker => "WorkerDashboard",
            Self::SafetyOfficer => "SafetyOfficerDashboard",
            Self::QualityInspector => "QualityInspectorDashboard",
        }
    }

    /// Returns the label and icon shown for this role.
    #[must_use]
    pub fn display(&self) -> RoleDisplay {
        match self {
            Self::Admin => RoleDisplay {
                label: "Administrator",
                icon: "shield",
            },
            Self::ProjectManager => RoleDisplay {
                label: "Project Manager",
                icon: "briefcase",
            },
            Self::SiteEngineer => RoleDisplay {
                label: "Site Engineer",
                icon: "hard-hat",
            },
            Self::Foreman => RoleDisplay {
                label: "Foreman",
                icon: "clipboard",
            },
            Self::Subcontractor => RoleDisplay {
                label: "Subcontractor",
                icon: "truck",
            },
            Self::Worker => RoleDisplay {
                label: "Worker",
                icon: "wrench",
            },
            Self::SafetyOfficer => RoleDisplay {
                label: "Safety Officer",
                icon: "life-buoy",
            },
            Self::QualityInspector => RoleDisplay {
                label: "Quality Inspector",
                icon: "search",
            },
        }
    }

    /// Returns whether this role holds the given capability flag.
    ///
    /// `FullAccess` implies every other capability.
    #[must_use]
    pub fn has_capability(&self, capability: Capability) -> bool {
        let capabilities = self.capabilities();
        capabilities.contains(&Capability::FullAccess) || capabilities.contains(&capability)
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "project_manager" => Ok(Self::ProjectManager),
            "site_engineer" => Ok(Self::SiteEngineer),
            "foreman" => Ok(Self::Foreman),
            "subcontractor" => Ok(Self::Subcontractor),
            "worker" => Ok(Self::Worker),
            "safety_officer" => Ok(Self::SafetyOfficer),
            "quality_inspector" => Ok(Self::QualityInspector),
            _ => Err(AppError::Validation(format!("unknown role value '{value}'"))),
        }
    }
}
