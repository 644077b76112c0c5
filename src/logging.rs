use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// 嵌入方日志配置；库内部只打点，不主动初始化全局 subscriber
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub log_level: String,
    pub enable_file_logs: bool,
    pub log_dir: String,
    pub file_prefix: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            enable_file_logs: false,
            log_dir: "./logs".to_string(),
            file_prefix: "review-scheduler".to_string(),
        }
    }
}

/// 为嵌入应用初始化 tracing：stdout 始终开启，可选每日滚动的
/// JSON 文件输出。全局 subscriber 已存在时静默返回（测试环境）。
pub fn init_tracing(config: &LogConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let stdout_layer = fmt::layer().with_target(true).with_thread_ids(false);
    let registry = Registry::default().with(env_filter).with(stdout_layer);

    let result = if config.enable_file_logs {
        let file_layer = fmt::layer()
            .with_writer(build_file_appender(config))
            .with_ansi(false)
            .json();
        registry.with(file_layer).try_init()
    } else {
        registry.try_init()
    };

    if let Err(e) = result {
        // try_init 在全局 subscriber 已设置时返回错误，属于正常情况；
        // 其他错误说明配置有误，应立即终止。
        if !e.to_string().contains("already been set") {
            panic!("Failed to initialize tracing: {e}");
        }
    }
}

fn build_file_appender(config: &LogConfig) -> RollingFileAppender {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(&config.file_prefix)
        .filename_suffix("log")
        .max_log_files(30)
        .build(&config.log_dir)
        .expect("Failed to create rolling file appender")
}
