use serde::{Deserialize, Serialize};

/// Envelope every server endpoint wraps its payload in. A `code` of zero
/// means success; anything else carries a human-readable `message`.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
}

/// Paged payload shared by the search endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PagedResult<T> {
    pub total: u64,
    #[serde(default)]
    pub items: Vec<T>,
}

/// One aggregated release the server has catalogued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Upstream thread id, unique per source website.
    pub tid: u64,
    pub website: String,
    pub section: String,
    pub category: String,
    pub title: String,
    /// Reported size in megabytes.
    #[serde(default)]
    pub size: f64,
    #[serde(default)]
    pub publish_date: String,
    #[serde(default)]
    pub magnet: String,
    /// Comma-joined preview image URLs.
    #[serde(default)]
    pub preview_images: String,
    /// Whether a rule or manual push already downloaded this release.
    #[serde(default)]
    pub in_stock: bool,
}

impl Article {
    /// Split the comma-joined preview field into individual URLs.
    pub fn preview_urls(&self) -> Vec<&str> {
        self.preview_images
            .split(',')
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .collect()
    }
}

/// Search filter for the article catalogue. Empty strings mean "no
/// constraint" and are understood that way server-side.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleFilter {
    pub page: u64,
    pub page_size: u64,
    pub keyword: String,
    pub website: String,
    pub section: String,
    pub category: String,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DateRange {
    pub from: String,
    pub to: String,
}

/// Destination for a manual article push.
#[derive(Debug, Clone, Serialize)]
pub struct PushTarget {
    pub downloader: String,
    pub save_path: String,
}

/// Source section with its live article count.
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    pub name: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Auto-download rule: articles matching section/category (and optionally a
/// title regex) are pushed to `downloader` at `save_path`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default)]
    pub id: u64,
    pub section: String,
    pub category: String,
    #[serde(default)]
    pub regex: String,
    pub downloader: String,
    pub save_path: String,
}

/// Scheduled job registered with the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: u64,
    pub task_name: String,
    pub task_func: String,
    #[serde(default)]
    pub task_args: String,
    /// Five-field cron expression, server local time.
    pub task_cron: String,
    pub enable: bool,
}

/// Callable exposed by the scheduler for task definitions.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskFunc {
    pub func_name: String,
    #[serde(default)]
    pub func_label: String,
    #[serde(default)]
    pub func_args: Vec<String>,
}

/// One finished (or failed) task execution.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskLog {
    pub id: u64,
    #[serde(default)]
    pub task_name: String,
    pub task_func: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub execute_seconds: f64,
    #[serde(default)]
    pub execute_result: String,
    pub success: bool,
    #[serde(default)]
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskLogFilter {
    pub page: u64,
    pub page_size: u64,
    pub task_func: String,
}

/// Record of one completed push to a downloader.
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadLog {
    pub id: u64,
    pub tid: u64,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub category: String,
    pub title: String,
    #[serde(default)]
    pub size: f64,
    #[serde(default)]
    pub preview_images: String,
    #[serde(default)]
    pub downloader: String,
    #[serde(default)]
    pub save_path: String,
    #[serde(default)]
    pub download_time: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DownloadLogFilter {
    pub page: u64,
    pub page_size: u64,
    pub downloader: String,
    pub save_path: String,
}

/// API key accepted by the server's `X-API-Key` header.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiToken {
    pub id: u64,
    pub key: String,
    #[serde(default)]
    pub create_time: String,
}

/// Authenticated account, returned by the login endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default, alias = "token")]
    pub api_key: String,
}

/// Downloader id plus the save paths it advertises; used to populate push
/// destinations.
#[derive(Debug, Clone, Deserialize)]
pub struct Downloader {
    pub id: String,
    #[serde(default)]
    pub save_paths: Vec<SavePath>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavePath {
    pub path: String,
    #[serde(default)]
    pub label: String,
}

/// Connection settings stored under a `Downloader.<id>` config key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloaderConfig {
    pub url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub save_paths: Vec<SavePath>,
}

/// One category-to-destination mapping in the `DownloadFolder` config value.
/// This payload is camelCase on the wire, unlike the rest of the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderMapping {
    pub category: String,
    #[serde(default)]
    pub sub_category: String,
    pub downloader: String,
    pub save_path: String,
    #[serde(default)]
    pub regex: String,
}

/// WeChat Work push settings stored under the `Notify.Wechat` config key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WechatNotifyConfig {
    pub enable: bool,
    #[serde(default)]
    pub push_image: bool,
    pub corp_id: String,
    pub corp_secret: String,
    pub agent_id: String,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub encoding_aes_key: String,
    #[serde(default)]
    pub to_user: String,
    #[serde(default)]
    pub proxy: String,
    #[serde(default)]
    pub template: String,
}

/// Telegram push settings stored under the `Notify.Telegram` config key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramNotifyConfig {
    pub enable: bool,
    #[serde(default)]
    pub push_image: bool,
    /// Send previews as spoiler media.
    #[serde(default)]
    pub spoiler: bool,
    pub bot_token: String,
    pub chat_id: String,
    #[serde(default)]
    pub template: String,
}

/// Check a config payload against the schema its key implies, so typos fail
/// locally instead of poisoning the server's stored settings. Unknown keys
/// pass through untyped.
pub fn check_config_payload(
    key: &str,
    payload: &serde_json::Value,
) -> Result<(), serde_json::Error> {
    if key == "DownloadFolder" {
        serde_json::from_value::<Vec<FolderMapping>>(payload.clone())?;
    } else if key.starts_with("Downloader.") {
        serde_json::from_value::<DownloaderConfig>(payload.clone())?;
    } else if key == "Notify.Wechat" {
        serde_json::from_value::<WechatNotifyConfig>(payload.clone())?;
    } else if key == "Notify.Telegram" {
        serde_json::from_value::<TelegramNotifyConfig>(payload.clone())?;
    }
    Ok(())
}
