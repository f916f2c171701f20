//! Build-time configuration for the frontend application.

use portfolio_shared::SourceMode;

// API base URL - 编译时从环境变量读取，默认本地开发地址
pub const API_BASE: &str = match option_env!("PORTFOLIO_API_BASE") {
    Some(url) => url,
    None => "http://localhost:3000",
};

const CONTENT_SOURCE: &str = match option_env!("PORTFOLIO_CONTENT_SOURCE") {
    Some(mode) => mode,
    None => "remote",
};

/// Where collections come from, fixed when the loader is built.
pub fn content_source_mode() -> SourceMode {
    CONTENT_SOURCE.parse().unwrap_or_else(|_| {
        web_sys::console::warn_1(
            &format!("Unknown PORTFOLIO_CONTENT_SOURCE `{CONTENT_SOURCE}`, using remote").into(),
        );
        SourceMode::Remote
    })
}
