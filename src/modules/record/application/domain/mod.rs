pub mod field_projector;
pub mod ordering;
pub mod record;
pub mod resource;

pub use field_projector::{FieldSet, ProjectionError};
pub use record::{Record, RecordId, RecordIdError};
pub use ordering::OrderBy;
pub use resource::ResourceKind;
