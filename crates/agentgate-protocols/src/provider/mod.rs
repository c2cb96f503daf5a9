//! Upstream provider protocol definitions.
//!
//! Providers open streaming sessions against a hosted completion service
//! and surface the service's events in delivery order.

mod traits;
mod request;
mod response;
mod session;

pub use traits::*;
pub use request::*;
pub use response::*;
pub use session::*;
