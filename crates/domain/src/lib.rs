//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod access;
mod capability;
mod module;
mod record;
mod role;

pub use access::{
    accessible_modules, capabilities_for, dashboard_route_for, display_info_for, module_accessible,
};
pub use capability::Capability;
pub use module::AppModule;
pub use record::{
    DocumentRecord, InvoiceRecord, ProjectRecord, TaskRecord, UserProfile, VendorRecord,
};
pub use role::{Role, RoleDisplay};
