//! Canvas名簿APIクライアント
//!
//! - 学生一覧: `GET {base}/courses/{id}/users?enrollment_type=student&per_page=N`
//!   `Link` ヘッダーの `rel="next"` を辿ってページングする
//! - コース情報: `GET {base}/courses/{id}`
//!
//! リトライはしない。2xx以外・接続エラー・タイムアウトは即座にエラーを返す。

use super::link::parse_next_link;
use crate::config::Config;
use crate::error::{ReportError, Result};
use attendance_common::{CourseInfo, RosterEntry};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, LINK};
use std::time::Duration;
use tracing::{debug, info};

/// エラーメッセージに含めるレスポンス本文の最大文字数
const MAX_ERROR_BODY_CHARS: usize = 500;

pub struct RosterClient {
    client: reqwest::Client,
    base_url: String,
    page_size: u32,
}

impl RosterClient {
    /// 設定からクライアントを作成（トークン未設定はエラー）
    pub fn new(config: &Config) -> Result<Self> {
        let token = config.get_api_token()?;
        Self::with_token(
            config.api_base(),
            &token,
            config.page_size,
            Duration::from_secs(config.timeout_seconds),
        )
    }

    pub fn with_token(
        base_url: &str,
        token: &str,
        page_size: u32,
        timeout: Duration,
    ) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| ReportError::Config(format!("Token inválido: {}", e)))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| ReportError::Config(format!("Cliente HTTP: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            page_size: page_size.max(1),
        })
    }

    /// コースの学生一覧を全ページ取得
    pub async fn fetch_students(&self, course_id: u64) -> Result<Vec<RosterEntry>> {
        let first_url = format!("{}/courses/{}/users", self.base_url, course_id);
        let per_page = self.page_size.to_string();

        let response = self
            .client
            .get(&first_url)
            .query(&[("enrollment_type", "student"), ("per_page", per_page.as_str())])
            .send()
            .await?;

        let mut students = Vec::new();
        let mut response = check_status(response).await?;
        let mut page = 1u32;

        loop {
            let next = response
                .headers()
                .get(LINK)
                .and_then(|v| v.to_str().ok())
                .and_then(parse_next_link);

            let batch: Vec<RosterEntry> = response.json().await?;
            debug!(page, count = batch.len(), "roster page received");
            students.extend(batch);

            let Some(next_url) = next else {
                break;
            };

            page += 1;
            debug!(page, url = %next_url, "following next link");
            response = check_status(self.client.get(&next_url).send().await?).await?;
        }

        info!(course_id, pages = page, students = students.len(), "roster fetched");
        Ok(students)
    }

    /// コース情報を取得
    pub async fn fetch_course_info(&self, course_id: u64) -> Result<CourseInfo> {
        let url = format!("{}/courses/{}", self.base_url, course_id);
        let response = check_status(self.client.get(&url).send().await?).await?;
        let course: CourseInfo = response.json().await?;
        debug!(course_id, name = %course.name, account_id = course.account_id, "course info received");
        Ok(course)
    }
}

/// 2xx以外をエラーに変換
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    let body: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();

    Err(ReportError::ApiStatus {
        status: status.as_u16(),
        url,
        body,
    })
}
