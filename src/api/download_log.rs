use super::client::{ApiError, Client};
use crate::types::{DownloadLog, DownloadLogFilter, PagedResult};

impl Client {
    pub fn search_download_logs(
        &self,
        filter: &DownloadLogFilter,
    ) -> Result<PagedResult<DownloadLog>, ApiError> {
        self.post_data("/download-log/search", filter)
    }
}
