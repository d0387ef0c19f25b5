mod create_record_service;
mod delete_record_service;
mod get_record_service;
mod list_records_service;
mod update_record_service;

pub use create_record_service::CreateRecordService;
pub use delete_record_service::DeleteRecordService;
pub use get_record_service::GetRecordService;
pub use list_records_service::ListRecordsService;
pub use update_record_service::UpdateRecordService;
