use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration for the upload/processing service
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory where uploaded file bytes are persisted (default: "uploaded_files")
    pub upload_dir: PathBuf,

    /// Number of simulated processing steps per file (default: 10)
    pub total_steps: u32,

    /// Delay between processing steps (default: 2s)
    pub step_delay: Duration,

    /// TCP port the server binds to (default: 3000)
    pub port: u16,

    /// Debug flag, loosens the default log filter (default: false)
    pub debug: bool,

    /// Maximum accepted request body size in bytes (default: 256 MB)
    pub max_upload_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploaded_files"),
            total_steps: 10,
            step_delay: Duration::from_secs(2),
            port: 3000,
            debug: false,
            max_upload_size: 256 * 1024 * 1024, // 256 MB
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            upload_dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(default.upload_dir),

            total_steps: env::var("TOTAL_STEPS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&v| v > 0)
                .unwrap_or(default.total_steps),

            step_delay: env::var("STEP_DELAY_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(default.step_delay),

            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.port),

            debug: env::var("APP_DEBUG")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(default.debug),

            max_upload_size: env::var("MAX_UPLOAD_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_upload_size),
        }
    }

    /// Total simulated wall-clock time for one file to complete
    pub fn processing_duration(&self) -> Duration {
        self.step_delay * self.total_steps
    }
}
