//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod tri_state;
pub mod catalog_query;
pub mod query_codec;
pub mod request_sequence;
pub mod catalog;
pub mod session;
pub mod text_highlight;
pub mod browse_const;
