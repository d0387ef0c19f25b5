mod create_record;
mod delete_record;
mod get_record;
mod list_records;
mod update_record;

pub use create_record::{CreateRecordError, CreateRecordUseCase};
pub use delete_record::{DeleteRecordError, DeleteRecordUseCase};
pub use get_record::{GetRecordError, GetRecordUseCase};
pub use list_records::{ListRecordsError, ListRecordsUseCase};
pub use update_record::{UpdateRecordError, UpdateRecordUseCase};
