/// Configuration for tracing initialization, assembled from settings at
/// startup.
pub struct TracingConfig {
    pub environment: String,
    pub level: String,
    pub json_format: bool,
}
