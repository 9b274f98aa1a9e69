//! Auth pass-through handlers. The protocol itself lives on the remote API;
//! this side only forwards credentials and mirrors the issued session.

mod login;
pub use login::login;

mod register;
pub use register::register;

mod validate_session;
pub use validate_session::validate_session;
