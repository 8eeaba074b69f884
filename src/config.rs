use crate::error::{ReportError, Result};
use attendance_common::DEFAULT_MATCH_FLOOR;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CanvasのAPIベースURL
pub const DEFAULT_BASE_URL: &str = "https://canvas.uautonoma.cl/api/v1/";

/// 名簿取得のページサイズ（Canvasの上限は100）
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// API呼び出し1回あたりのタイムアウト
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// トークンを読む環境変数（優先順）
const TOKEN_ENV_VARS: &[&str] = &["CANVAS_API_TOKEN", "TOKEN"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_token: Option<String>,
    pub base_url: String,
    pub page_size: u32,
    /// 一致とみなす類似度の下限（0-100）
    pub match_floor: f64,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_token: None,
            base_url: DEFAULT_BASE_URL.into(),
            page_size: DEFAULT_PAGE_SIZE,
            match_floor: DEFAULT_MATCH_FLOOR,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ReportError::Config("No se encontró el directorio home".into()))?;
        Ok(home.join(".config").join("attendance-report").join("config.json"))
    }

    /// APIトークンを取得（環境変数を優先）
    pub fn get_api_token(&self) -> Result<String> {
        for var in TOKEN_ENV_VARS {
            if let Ok(token) = std::env::var(var) {
                if !token.trim().is_empty() {
                    return Ok(token.trim().to_string());
                }
            }
        }

        self.api_token
            .clone()
            .filter(|t| !t.trim().is_empty())
            .ok_or(ReportError::MissingApiToken)
    }

    pub fn set_api_token(&mut self, token: String) -> Result<()> {
        self.api_token = Some(token);
        self.save()
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        self.base_url = url;
        self.save()
    }

    /// 末尾スラッシュを除いたベースURL
    pub fn api_base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// カレントディレクトリ（と親）の `.env` を読み込む
///
/// ファイルがなければ `Ok(None)`、書式エラーは `Config` エラー
pub fn load_dotenv() -> Result<Option<PathBuf>> {
    dotenv_outcome(dotenvy::dotenv())
}

/// 指定パスの `.env` を読み込む
pub fn load_dotenv_from(path: &Path) -> Result<Option<PathBuf>> {
    dotenv_outcome(dotenvy::from_path(path).map(|_| path.to_path_buf()))
}

fn dotenv_outcome(
    result: std::result::Result<PathBuf, dotenvy::Error>,
) -> Result<Option<PathBuf>> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(ReportError::Config(format!("Archivo .env inválido: {}", e))),
    }
}
