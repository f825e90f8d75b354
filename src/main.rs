use clap::Parser;
use intelleo_guide::{cli, config, error, render, review, simulate, store};
use intelleo_guide_common::feedback::FEEDBACK_KEY_PREFIX;
use intelleo_guide_common::fixtures::filter_glossary;
use intelleo_guide_common::pages;
use intelleo_guide_common::{
    DashboardTable, Embed, FeedbackState, FixtureProvider, FixtureSet, ImportPhase, QuickSearch, SearchIndex,
    ValidationQueue,
};
use cli::{Cli, Commands};
use config::Config;
use error::{GuideError, Result};
use render::TerminalNavigator;
use store::FileStore;

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    // 設定コマンドは壊れた設定やフィクスチャ指定を直すためにも使うので失敗で止めない
    let repairing = matches!(cli.command, Commands::Config { .. });
    let config = if repairing { Config::load_or_default()? } else { Config::load()? };
    let fixtures = if repairing {
        FixtureSet::default()
    } else {
        config.load_fixtures(cli.fixtures.as_deref())?
    };

    match cli.command {
        Commands::Search { query, json, open } => {
            let mut search = QuickSearch::new(SearchIndex::new(fixtures.search_entries()));
            search.set_query(&query);

            if json {
                println!("{}", serde_json::to_string_pretty(search.results())?);
            } else {
                print!("{}", render::render_search_results(&query, search.results()));
            }

            if open {
                match search.results().first().map(|e| e.path.clone()) {
                    Some(path) => {
                        println!();
                        search.select_result(&path, &mut TerminalNavigator::default());
                    }
                    None => log::warn!("no result to open for {:?}", query),
                }
            }
        }

        Commands::Pages => {
            print!("{}", render::render_page_list());
        }

        Commands::Open { path } => {
            let page = pages::page_for(&path).ok_or_else(|| GuideError::UnknownPage(path.clone()))?;
            println!("{}", render::render_page(page));

            if let Some(embed) = page.embed {
                let command = match embed {
                    Embed::Dashboard => "dashboard",
                    Embed::Import => "import",
                    Embed::Validation => "validate",
                    Embed::Glossary => "glossary",
                };
                println!("💡 Prova il simulatore: intelleo-guide {}", command);
            }

            let store = FileStore::open(&config.feedback_store_path()?);
            let feedback = FeedbackState::load(page.path, &store);
            if feedback.should_prompt() {
                println!(
                    "\nQuesta pagina ti è stata utile? → intelleo-guide feedback {} up|down",
                    page.path
                );
            } else {
                println!("\nGrazie per il tuo feedback!");
            }
        }

        Commands::Glossary { filter } => {
            let terms = fixtures.glossary_terms();
            let matched = filter_glossary(&terms, filter.as_deref().unwrap_or(""));
            if matched.is_empty() {
                println!("Nessun termine trovato");
            } else {
                print!("{}", render::render_glossary(&matched));
            }
        }

        Commands::Dashboard { search, sort, select, reset } => {
            println!("📊 Database - simulazione\n");
            let mut table = DashboardTable::new(fixtures.dashboard_rows());

            if let Some(text) = search {
                table.set_search_text(&text);
            }
            for column in sort {
                table.set_sort(column);
            }
            if let Some(id) = select {
                table.select_row(id);
            }

            print!("{}", render::render_table(&table));
            if table.has_selection() {
                println!("\n✔ Riga selezionata: Modifica · Elimina");
            }

            if reset {
                table.reset();
                println!("\n↺ Reset\n");
                print!("{}", render::render_table(&table));
            }
        }

        Commands::Import { speed } => {
            println!("📥 Importazione - simulazione\n");
            let speed = speed.unwrap_or(config.import_speed);
            let script = fixtures.import_script().scaled(speed);
            let sim = simulate::run_with_progress(script).await;

            if sim.phase() == ImportPhase::Done {
                println!("\n✅ Importazione completata");
            } else {
                println!("\nImportazione annullata");
            }
        }

        Commands::Validate { approve, reject } => {
            println!("🔍 Convalida dati - simulazione\n");
            let mut queue = ValidationQueue::new(fixtures.queue_items());

            if approve.is_empty() && reject.is_empty() {
                review::run_interactive_review(&mut queue)?;
            } else {
                for notification in review::apply_decisions(&mut queue, &approve, &reject) {
                    println!("{}", render::render_notification(&notification));
                }
                println!();
                if queue.is_empty() {
                    println!("✅ {}", review::QUEUE_EMPTY_MESSAGE);
                } else {
                    for item in queue.items() {
                        println!("{}", render::render_queue_item(item));
                    }
                }
            }
        }

        Commands::Feedback { path: None, .. } => {
            let store = FileStore::open(&config.feedback_store_path()?);
            if store.is_empty() {
                println!("Nessun feedback salvato ({})", store.path().display());
            }
            for (key, value) in store.entries() {
                let path = key.strip_prefix(FEEDBACK_KEY_PREFIX).unwrap_or(key);
                println!("{:<18} {}", path, value);
            }
        }

        Commands::Feedback { path: Some(path), vote, clear } => {
            let path = pages::normalize_path(&path);
            if pages::page_for(&path).is_none() {
                log::warn!("feedback for unknown page {}", path);
            }

            let mut store = FileStore::open(&config.feedback_store_path()?);
            let mut feedback = FeedbackState::load(&path, &store);

            if clear {
                feedback
                    .clear(&mut store)
                    .map_err(|e| GuideError::FeedbackStore(e.to_string()))?;
                println!("✔ Feedback rimosso: {}", path);
            } else if let Some(vote) = vote {
                feedback
                    .cast(vote, &mut store)
                    .map_err(|e| GuideError::FeedbackStore(e.to_string()))?;
                println!("✔ Grazie per il tuo feedback!");
            } else {
                match feedback.vote() {
                    Some(v) => println!("{}: {}", path, v.as_str()),
                    None => println!("{}: nessun feedback", path),
                }
            }
        }

        Commands::Config { show, set_fixtures, clear_fixtures } => {
            let mut config = config;

            if let Some(path) = set_fixtures {
                if !path.exists() {
                    return Err(GuideError::FixturesNotFound(path.display().to_string()));
                }
                config.set_fixtures(Some(path))?;
                println!("✔ フィクスチャを設定しました");
            }

            if clear_fixtures {
                config.set_fixtures(None)?;
                println!("✔ フィクスチャ設定を解除しました");
            }

            if show {
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!(
                    "  フィクスチャ: {}",
                    config
                        .fixtures_path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "組み込み".to_string())
                );
                println!("  フィードバック: {}", config.feedback_store_path()?.display());
                println!("  インポート速度: {}x", config.import_speed);
            }
        }
    }

    Ok(())
}
