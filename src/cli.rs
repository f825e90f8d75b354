use clap::{Parser, Subcommand};
use intelleo_guide_common::{SortColumn, Vote};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "intelleo-guide")]
#[command(about = "Intelleo ヘルプガイド（検索・シミュレータ・フィードバック）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力（2回指定でdebug）
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// フィクスチャJSON（設定・環境変数より優先）
    #[arg(long, global = true)]
    pub fixtures: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ガイドをクイック検索
    Search {
        /// 検索語（タイトル・キーワードに部分一致）
        #[arg(required = true)]
        query: String,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,

        /// 先頭の結果をそのまま開く
        #[arg(long)]
        open: bool,
    },

    /// ページ一覧を表示
    Pages,

    /// ページを表示
    Open {
        /// ページのパス（例: /import）
        #[arg(required = true)]
        path: String,
    },

    /// 用語集を表示
    Glossary {
        /// 絞り込み文字列
        filter: Option<String>,
    },

    /// ダッシュボード表のシミュレーション
    Dashboard {
        /// 検索文字列（氏名・書類種別）
        #[arg(short, long)]
        search: Option<String>,

        /// 並べ替え列（繰り返すと昇順/降順を切り替え）
        #[arg(long = "sort", value_name = "COLUMN")]
        sort: Vec<SortColumn>,

        /// 行を選択
        #[arg(long)]
        select: Option<u32>,

        /// 最後に状態をリセット
        #[arg(long)]
        reset: bool,
    },

    /// インポート処理のシミュレーション
    Import {
        /// 再生速度の係数（2.0で2倍速）
        #[arg(long)]
        speed: Option<f64>,
    },

    /// 検証キューのシミュレーション（ID指定がなければ対話モード）
    Validate {
        /// 承認するID
        #[arg(long = "approve", value_name = "ID")]
        approve: Vec<u32>,

        /// 却下するID
        #[arg(long = "reject", value_name = "ID")]
        reject: Vec<u32>,
    },

    /// ページのフィードバック（パス省略時は一覧）
    Feedback {
        /// ページのパス
        path: Option<String>,

        /// 評価 (up/down)
        vote: Option<Vote>,

        /// 保存済みの評価を削除
        #[arg(long, conflicts_with = "vote", requires = "path")]
        clear: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// フィクスチャJSONを設定
        #[arg(long = "set-fixtures", value_name = "PATH")]
        set_fixtures: Option<PathBuf>,

        /// フィクスチャ設定を解除
        #[arg(long, conflicts_with = "set_fixtures")]
        clear_fixtures: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dashboard_sorts() {
        let cli = Cli::parse_from([
            "intelleo-guide",
            "dashboard",
            "--sort",
            "dipendente",
            "--sort",
            "dipendente",
            "--select",
            "3",
        ]);
        match cli.command {
            Commands::Dashboard { sort, select, .. } => {
                assert_eq!(sort, vec![SortColumn::EmployeeName, SortColumn::EmployeeName]);
                assert_eq!(select, Some(3));
            }
            _ => panic!("dashboard expected"),
        }
    }

    #[test]
    fn test_parse_feedback_vote() {
        let cli = Cli::parse_from(["intelleo-guide", "-v", "feedback", "/import", "down"]);
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Feedback { path, vote, clear } => {
                assert_eq!(path.as_deref(), Some("/import"));
                assert_eq!(vote, Some(Vote::Down));
                assert!(!clear);
            }
            _ => panic!("feedback expected"),
        }
    }

    #[test]
    fn test_feedback_clear_conflicts_with_vote() {
        let result = Cli::try_parse_from(["intelleo-guide", "feedback", "/import", "up", "--clear"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_feedback_clear_requires_path() {
        assert!(Cli::try_parse_from(["intelleo-guide", "feedback", "--clear"]).is_err());
        assert!(Cli::try_parse_from(["intelleo-guide", "feedback"]).is_ok());
    }
}
