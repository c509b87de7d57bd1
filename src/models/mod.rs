pub mod company;
pub mod event_kind;
pub mod record;
pub mod settings;
pub mod user;

pub use company::{Company, CompanyUpdate};
pub use event_kind::EventKind;
pub use record::AttendanceRecord;
pub use settings::{PermissionFlag, SystemSettings};
pub use user::User;
