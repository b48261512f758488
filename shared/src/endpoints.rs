//! Paths served by the Namhatta backend, relative to the API base URL.
//!
//! Fixed paths are constants; paths carrying an identifier are built by the
//! helper functions, which percent-encode the identifier.

use urlencoding::encode;

// System
pub const HEALTH: &str = "/api/health";
pub const ABOUT: &str = "/api/about";

// Authentication
pub const AUTH_LOGIN: &str = "/api/auth/login";
pub const AUTH_LOGOUT: &str = "/api/auth/logout";
pub const AUTH_VERIFY: &str = "/api/auth/verify";
pub const AUTH_HEALTH: &str = "/api/auth/health";
pub const AUTH_DEV_USERS: &str = "/api/auth/dev/users";
pub const AUTH_DEV_STATUS: &str = "/api/auth/dev/status";
pub const AUTH_DEV_TOGGLE: &str = "/api/auth/dev/toggle";
pub const AUTH_DEV_ENV: &str = "/api/auth/dev/env";

// Devotees
pub const DEVOTEES: &str = "/api/devotees";

// Namhattas
pub const NAMHATTAS: &str = "/api/namhattas";
pub const NAMHATTAS_PENDING: &str = "/api/namhattas/pending";

// Dashboard
pub const DASHBOARD: &str = "/api/dashboard";
pub const STATUS_DISTRIBUTION: &str = "/api/status-distribution";

// Devotional statuses and updates
pub const STATUSES: &str = "/api/statuses";
pub const UPDATES: &str = "/api/updates";

// Leadership hierarchy
pub const HIERARCHY: &str = "/api/hierarchy";

// Geography
pub const COUNTRIES: &str = "/api/countries";
pub const STATES: &str = "/api/states";
pub const DISTRICTS: &str = "/api/districts";
pub const SUB_DISTRICTS: &str = "/api/sub-districts";
pub const VILLAGES: &str = "/api/villages";
pub const PINCODES: &str = "/api/pincodes";
pub const PINCODES_SEARCH: &str = "/api/pincodes/search";
pub const ADDRESS_BY_PINCODE: &str = "/api/address-by-pincode";

// Map aggregates
pub const MAP_COUNTRIES: &str = "/api/map/countries";
pub const MAP_STATES: &str = "/api/map/states";
pub const MAP_DISTRICTS: &str = "/api/map/districts";
pub const MAP_SUBDISTRICTS: &str = "/api/map/subdistricts";
pub const MAP_NAMHATTAS: &str = "/api/map/namhattas";

// Files
pub const FILES_UPLOAD: &str = "/api/files/upload";

// Administration
pub const ADMIN_USERS: &str = "/api/admin/users";
pub const ADMIN_SUPERVISOR_REGISTRATION: &str = "/api/admin/supervisor-registration";
pub const ADMIN_DISTRICT_SUPERVISORS: &str = "/api/admin/district-supervisors";

fn nested(collection: &str, id: &str) -> String {
    format!("{}/{}", collection, encode(id))
}

pub fn devotee(id: &str) -> String {
    nested(DEVOTEES, id)
}

pub fn devotees_by_namhatta(namhatta_id: &str) -> String {
    format!("{}/namhatta/{}", DEVOTEES, encode(namhatta_id))
}

pub fn namhatta(id: &str) -> String {
    nested(NAMHATTAS, id)
}

pub fn namhatta_devotees(id: &str) -> String {
    format!("{}/devotees", namhatta(id))
}

pub fn approve_namhatta(id: &str) -> String {
    format!("{}/approve", namhatta(id))
}

pub fn reject_namhatta(id: &str) -> String {
    format!("{}/reject", namhatta(id))
}

pub fn check_namhatta_code(code: &str) -> String {
    format!("{}/check-code/{}", NAMHATTAS, encode(code))
}

pub fn status(id: &str) -> String {
    nested(STATUSES, id)
}

pub fn update(id: &str) -> String {
    nested(UPDATES, id)
}

pub fn hierarchy_level(level: &str) -> String {
    nested(HIERARCHY, level)
}

pub fn file(name: &str) -> String {
    nested("/api/files", name)
}

pub fn user_address_defaults(user_id: &str) -> String {
    format!("/api/admin/user-address-defaults/{}", encode(user_id))
}
