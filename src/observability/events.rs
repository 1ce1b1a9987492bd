//! Log event names

pub const SERVER_STARTED: &str = "SERVER_STARTED";
pub const CLIENT_CREATED: &str = "CLIENT_CREATED";
pub const CLIENT_STATUS_UPDATED: &str = "CLIENT_STATUS_UPDATED";
pub const CLIENT_REJECTED: &str = "CLIENT_REJECTED";
pub const STORAGE_FAULT: &str = "STORAGE_FAULT";
pub const SUBMIT_RESPONSE: &str = "SUBMIT_RESPONSE";
pub const SUBMIT_FAILED: &str = "SUBMIT_FAILED";
