//! Fixed values shared across the pipeline.

/// Format of `FileMetadata::upload_timestamp` (UTC).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Subject line of the completion notification.
pub const NOTIFICATION_SUBJECT: &str = "CSV Processing Complete";

/// Response body for an event that does not carry a bucket and key.
pub const INVALID_EVENT_MESSAGE: &str = "Invalid event format";

/// Response body when the AWS clients have no usable credentials.
pub const CREDENTIALS_MISSING_MESSAGE: &str = "AWS credentials missing";

pub const DEFAULT_LOCALSTACK_ENDPOINT: &str = "http://localhost:4566";
pub const DEFAULT_S3_BUCKET: &str = "csv-bucket";
pub const DEFAULT_DYNAMO_TABLE: &str = "CSVMetadata";
pub const DEFAULT_SNS_TOPIC_ARN: &str = "arn:aws:sns:us-east-1:000000000000:CSVProcessingTopic";
pub const DEFAULT_AWS_REGION: &str = "us-east-1";
