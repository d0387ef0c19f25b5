pub mod blob_bucket;

pub use blob_bucket::{BlobBucket, BlobBucketError};
