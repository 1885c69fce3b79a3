//! Domain Models
//!
//! Passive record shapes for the box-office collections. Each entity maps to
//! one collection; field names on the wire are camelCase.

pub mod authentication;
pub mod multilingual;
pub mod ownership_info;
pub mod payment_notification;
pub mod staff;
pub mod subject;
pub mod tel_staff;
pub mod ticket_type_group;

pub use authentication::*;
pub use multilingual::*;
pub use ownership_info::*;
pub use payment_notification::*;
pub use staff::*;
pub use subject::*;
pub use tel_staff::*;
pub use ticket_type_group::*;
