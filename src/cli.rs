use clap::{Parser, Subcommand};
use nasa_gallery_common::{EmptyTermPolicy, ZeroResultsPolicy};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nasa-gallery")]
#[command(about = "NASA画像ライブラリの検索・選択・CSVエクスポートツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 検索して1ページ分を表示
    Search {
        /// 検索語（省略時は前回の検索語）
        term: Option<String>,

        /// 表示するページ（1始まり）
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// 選択するアイテムID（複数可）
        #[arg(short, long)]
        select: Vec<String>,

        /// 選択したアイテムをCSVに書き出す
        #[arg(short, long)]
        export: bool,

        /// 出力先ディレクトリ（省略時は設定値かカレント）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// CSVのフィールドをクォートする
        #[arg(long)]
        quoted: bool,
    },

    /// IDを指定して詳細を表示
    Detail {
        /// アイテムID（nasa_id）
        #[arg(required = true)]
        id: String,
    },

    /// 対話的に検索・ページ移動・選択・エクスポート
    Browse {
        /// 最初の検索語（省略時は前回の検索語）
        term: Option<String>,

        /// 出力先ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// CSVのフィールドをクォートする
        #[arg(long)]
        quoted: bool,
    },

    /// デモフォームを対話入力
    Form {
        /// 入力した国名の候補だけを表示して終了
        #[arg(long)]
        suggest_country: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// APIベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// 空の検索語の扱い (fetch-default/reject)
        #[arg(long)]
        empty_term: Option<EmptyTermPolicy>,

        /// 0件の扱い (error/empty-success)
        #[arg(long)]
        zero_results: Option<ZeroResultsPolicy>,

        /// CSV出力先ディレクトリを設定
        #[arg(long)]
        set_export_dir: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
