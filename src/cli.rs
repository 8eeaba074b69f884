use crate::upload::DEFAULT_NAME_COLUMN;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "attendance-report")]
#[command(about = "Generador de reporte de asistencia (Zoom vs. Canvas)", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 出席ファイルと名簿を突合してExcelを出力
    Report {
        /// CanvasのコースID
        #[arg(short, long)]
        course: u64,

        /// Zoomの参加者レポート（CSV/Excel）
        #[arg(short, long)]
        input: PathBuf,

        /// 出力ファイル/ディレクトリ（デフォルト: カレント）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 一致とみなす類似度の下限（0-100、デフォルトは設定値）
        #[arg(long)]
        floor: Option<f64>,

        /// 名前列のヘッダー
        #[arg(long, default_value = DEFAULT_NAME_COLUMN)]
        name_column: String,

        /// API取得の代わりに名簿スナップショットを使用
        #[arg(long)]
        snapshot: Option<PathBuf>,

        /// 対話式レビューをスキップ
        #[arg(long)]
        no_review: bool,
    },

    /// 名簿とコース情報を取得してスナップショットJSONに保存
    Roster {
        /// CanvasのコースID
        #[arg(short, long)]
        course: u64,

        /// 出力JSON（デフォルト: roster-{ID}.json）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 名前1件を候補リストと照合（確認用）
    Match {
        /// 出席ファイル側の名前
        #[arg(required = true)]
        name: String,

        /// 照合対象の名前
        #[arg(short, long, required = true, num_args = 1..)]
        targets: Vec<String>,
    },

    /// 設定を表示/編集
    Config {
        /// APIトークンを設定
        #[arg(long)]
        set_token: Option<String>,

        /// APIベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
