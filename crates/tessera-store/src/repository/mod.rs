//! Repository Layer
//!
//! MongoDB repositories for all domain entities. Each repository is
//! constructed from an explicit `&Database` handle and opens its collection
//! primary-preferred with a majority write concern. `ensure_indexes` is
//! best-effort: an index build failing on pre-existing data is logged and
//! must not take the process down.

pub mod authentication;
pub mod ownership_info;
pub mod payment_notification;
pub mod staff;
pub mod subject;
pub mod tel_staff;
pub mod ticket_type_group;

pub use authentication::AuthenticationRepository;
pub use ownership_info::OwnershipInfoRepository;
pub use payment_notification::PaymentNotificationRepository;
pub use staff::StaffRepository;
pub use subject::SubjectRepository;
pub use tel_staff::TelStaffRepository;
pub use ticket_type_group::TicketTypeGroupRepository;

use mongodb::{Collection, IndexModel};
use tracing::warn;

/// Declare indexes, logging failures instead of raising them. Duplicate
/// pre-existing data can legitimately defeat a new unique index; the
/// collection stays usable without it.
pub(crate) async fn ensure_indexes<T: Send + Sync>(
    collection: &Collection<T>,
    indexes: Vec<IndexModel>,
) {
    for index in indexes {
        if let Err(e) = collection.create_index(index).await {
            warn!(
                collection = collection.name(),
                error = %e,
                "index creation failed"
            );
        }
    }
}
