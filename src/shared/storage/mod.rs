mod file_storage;
mod local_file_storage;
mod upload_policy;

pub use file_storage::{FileStorage, StorageError, UploadDirectory, UploadedFile};
pub use local_file_storage::LocalFileStorage;
pub use upload_policy::{UploadPolicy, UploadRejection};
