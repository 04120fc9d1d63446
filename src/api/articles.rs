use rand::distributions::Alphanumeric;
use rand::Rng;

use super::client::{ApiError, Client};
use crate::types::{Article, ArticleFilter, PagedResult, PushTarget, Section};

impl Client {
    /// Paged catalogue search.
    pub fn search_articles(&self, filter: &ArticleFilter) -> Result<PagedResult<Article>, ApiError> {
        self.post_data("/articles/search", filter)
    }

    /// Source sections with live counts, for the status overview and filter
    /// completion.
    pub fn sections(&self) -> Result<Vec<Section>, ApiError> {
        self.get_data("/articles/sections")
    }

    /// Push one article through the rule-configured destination.
    pub fn push_article(&self, tid: u64) -> Result<String, ApiError> {
        self.get_ack(&format!("/articles/download/{tid}"))
    }

    /// Push one article to an explicit downloader and save path.
    pub fn push_article_to(
        &self,
        tid: u64,
        downloader: &str,
        save_path: &str,
    ) -> Result<String, ApiError> {
        let target = PushTarget {
            downloader: downloader.to_string(),
            save_path: save_path.to_string(),
        };
        self.post_ack(&format!("/articles/download/{tid}"), &target)
    }

    /// Upload a spreadsheet of articles (`.xls`, `.xlsx` or `.csv`) for the
    /// server to ingest.
    pub fn import_articles(&self, filename: &str, bytes: &[u8]) -> Result<String, ApiError> {
        let boundary: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(24)
            .map(char::from)
            .collect();
        let body = multipart_file(&boundary, filename, bytes);
        let content_type = format!("multipart/form-data; boundary={boundary}");
        self.post_raw_ack("/articles/import", &content_type, &body)
    }
}

/// Assemble a single-file `multipart/form-data` body under field name `file`.
fn multipart_file(boundary: &str, filename: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(bytes.len() + 256);
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipart_body_brackets_the_payload() {
        let body = multipart_file("XyZ", "articles.csv", b"tid,title\n1,x\n");
        let text = String::from_utf8(body).unwrap();
        assert!(text.starts_with("--XyZ\r\n"));
        assert!(text.contains("filename=\"articles.csv\""));
        assert!(text.contains("tid,title\n1,x\n"));
        assert!(text.ends_with("\r\n--XyZ--\r\n"));
    }
}
