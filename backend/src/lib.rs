//! Server-side client for the remote komiz catalog API.

pub mod api;
pub mod remote;
