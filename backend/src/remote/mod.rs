//! HTTP plumbing shared by every remote API call.

pub mod komiz_client;
