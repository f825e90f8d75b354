//! シミュレータ用の固定データ
//!
//! 画面はFixtureProviderを通してデータを受け取るので、テストや
//! 設定ファイルで任意のデータに差し替えられる。
//! FixtureSetの各フィールドは省略時に組み込みデータになる。

use crate::error::Result;
use crate::import_sim::ImportScript;
use crate::types::{Confidence, GlossaryTerm, QueueItem, RowStatus, SearchEntry, TableRow};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// データ提供元
pub trait FixtureProvider {
    fn search_entries(&self) -> Vec<SearchEntry>;
    fn dashboard_rows(&self) -> Vec<TableRow>;
    fn queue_items(&self) -> Vec<QueueItem>;
    fn glossary_terms(&self) -> Vec<GlossaryTerm>;
    fn import_script(&self) -> ImportScript;
}

/// JSONで上書きできるデータ一式
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureSet {
    #[serde(default = "builtin_search_entries")]
    pub search_entries: Vec<SearchEntry>,
    #[serde(default = "builtin_dashboard_rows")]
    pub dashboard_rows: Vec<TableRow>,
    #[serde(default = "builtin_queue_items")]
    pub queue_items: Vec<QueueItem>,
    #[serde(default = "builtin_glossary_terms")]
    pub glossary_terms: Vec<GlossaryTerm>,
    #[serde(default)]
    pub import_script: ImportScript,
}

impl Default for FixtureSet {
    fn default() -> Self {
        Self {
            search_entries: builtin_search_entries(),
            dashboard_rows: builtin_dashboard_rows(),
            queue_items: builtin_queue_items(),
            glossary_terms: builtin_glossary_terms(),
            import_script: ImportScript::default(),
        }
    }
}

impl FixtureSet {
    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let set: Self = serde_json::from_str(json)?;
        Ok(set)
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

impl FixtureProvider for FixtureSet {
    fn search_entries(&self) -> Vec<SearchEntry> {
        self.search_entries.clone()
    }

    fn dashboard_rows(&self) -> Vec<TableRow> {
        self.dashboard_rows.clone()
    }

    fn queue_items(&self) -> Vec<QueueItem> {
        self.queue_items.clone()
    }

    fn glossary_terms(&self) -> Vec<GlossaryTerm> {
        self.glossary_terms.clone()
    }

    fn import_script(&self) -> ImportScript {
        self.import_script.clone()
    }
}

fn builtin_search_entries() -> Vec<SearchEntry> {
    vec![
        SearchEntry::new("Panoramica", "/", "home inizio start introduzione"),
        SearchEntry::new("Database", "/database", "tabella dati ricerca filtro modifica cancella certificati"),
        SearchEntry::new("Importazione AI", "/import", "upload pdf trascina drag drop analisi intelligenza artificiale"),
        SearchEntry::new("Convalida Dati", "/validation", "verifica approva orfani errori matricola"),
        SearchEntry::new("Scadenzario", "/calendar", "gantt scadenze tempo rinnovo timeline"),
        SearchEntry::new("Dipendenti", "/employees", "personale anagrafica csv importazione"),
        SearchEntry::new("Sicurezza", "/security", "password crittografia audit log gdpr"),
        SearchEntry::new("Configurazione", "/settings", "email smtp opzioni preferenze"),
        SearchEntry::new("Backup & Manutenzione", "/maintenance", "ripristino salvataggio migrazione"),
        SearchEntry::new("Risoluzione Problemi", "/troubleshooting", "errori bug crash aiuto supporto"),
        SearchEntry::new("Glossario", "/glossary", "termini definizioni vocabolario"),
        SearchEntry::new("Scorciatoie", "/shortcuts", "tastiera comandi rapidi hotkeys"),
    ]
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // 組み込みデータの日付は常に有効
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn builtin_dashboard_rows() -> Vec<TableRow> {
    let row = |id, name: &str, doc: &str, issue, expiry, status| TableRow {
        id,
        employee_name: name.into(),
        document_type: doc.into(),
        issue_date: issue,
        expiry_date: expiry,
        status,
    };
    vec![
        row(1, "ROSSI MARIO", "FORMAZIONE GENERALE", date(2023, 5, 15), date(2028, 5, 15), RowStatus::Active),
        row(2, "BIANCHI LUCA", "PRIMO SOCCORSO", date(2021, 2, 10), date(2024, 2, 10), RowStatus::Expired),
        row(3, "VERDI GIUSEPPE", "ANTINCENDIO", date(2020, 11, 20), date(2025, 11, 20), RowStatus::Expiring),
        row(4, "FERRARI PAOLO", "PREPOSTO", date(2022, 9, 1), date(2027, 9, 1), RowStatus::Active),
        row(5, "NERI ALESSANDRO", "HLO", date(2024, 3, 12), date(2029, 3, 12), RowStatus::Active),
    ]
}

fn builtin_queue_items() -> Vec<QueueItem> {
    vec![
        QueueItem {
            id: 1,
            file_name: "scansione_04.pdf".into(),
            employee_name: Some("BIANCHI LUCA".into()),
            category: "ANTINCENDIO".into(),
            date: date(2024, 5, 10),
            confidence: Confidence::High,
        },
        QueueItem {
            id: 2,
            file_name: "doc_unknown_22.pdf".into(),
            employee_name: None,
            category: "VISITA MEDICA".into(),
            date: date(2023, 11, 1),
            confidence: Confidence::Low,
        },
        QueueItem {
            id: 3,
            file_name: "cert_rossi.pdf".into(),
            employee_name: Some("ROSSI MARIO".into()),
            category: "PLE".into(),
            date: date(2022, 1, 15),
            confidence: Confidence::Medium,
        },
    ]
}

fn builtin_glossary_terms() -> Vec<GlossaryTerm> {
    let term = |term: &str, definition: &str| GlossaryTerm {
        term: term.into(),
        definition: definition.into(),
    };
    vec![
        term("Matricola", "Il codice identificativo univoco (Badge) di un dipendente. Intelleo lo usa per collegare con certezza un certificato alla persona giusta."),
        term("Orfano", "Un certificato che è stato analizzato dall'AI ma per cui non è stato trovato un dipendente corrispondente nel database (es. perché la matricola era illeggibile o il dipendente non è ancora stato creato)."),
        term("Upsert", "Tecnica di importazione dati: se il dipendente esiste già, lo aggiorna; se non esiste, lo crea. Non cancella mai nulla."),
        term("Lock File", "Un file speciale (.lock) che il programma crea quando apri il database. Serve a dire agli altri PC \"Attenzione, sto scrivendo io qui!\", impedendo conflitti."),
        term("Hardware ID (HWID)", "Un codice alfanumerico univoco generato basandosi sui componenti fisici del tuo PC. Serve a legare la licenza software a quella specifica macchina."),
        term("SMTP", "Simple Mail Transfer Protocol. È il \"postino\" digitale. Le impostazioni SMTP dicono a Intelleo quale server usare per spedire le email di notifica."),
        term("Confidence Score", "Il grado di sicurezza (da 0 a 100%) che l'Intelligenza Artificiale assegna a una lettura. Se è basso, il sistema potrebbe segnare il dato come \"Incerto\"."),
        term("Gantt", "Un tipo di grafico a barre orizzontali usato nello Scadenzario per visualizzare la durata temporale dei certificati."),
    ]
}

/// 用語の絞り込み（用語名・定義の部分一致）
pub fn filter_glossary<'a>(terms: &'a [GlossaryTerm], text: &str) -> Vec<&'a GlossaryTerm> {
    let needle = text.trim().to_lowercase();
    terms
        .iter()
        .filter(|t| {
            needle.is_empty()
                || t.term.to_lowercase().contains(&needle)
                || t.definition.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sizes() {
        let set = FixtureSet::default();
        assert_eq!(set.search_entries().len(), 12);
        assert_eq!(set.dashboard_rows().len(), 5);
        assert_eq!(set.queue_items().len(), 3);
        assert_eq!(set.glossary_terms().len(), 8);
        assert_eq!(set.import_script().events.len(), 4);
    }

    #[test]
    fn test_partial_json_keeps_builtin_rest() {
        let json = r#"{
            "queueItems": [
                {"id": 9, "fileName": "x.pdf", "category": "PLE", "date": "2024-01-01", "confidence": "medium"}
            ]
        }"#;
        let set = FixtureSet::from_json(json).unwrap();
        assert_eq!(set.queue_items().len(), 1);
        assert_eq!(set.queue_items()[0].id, 9);
        assert_eq!(set.dashboard_rows().len(), 5);
        assert_eq!(set.import_script(), ImportScript::default());
    }

    #[test]
    fn test_partial_import_script() {
        let json = r#"{ "importScript": { "tickIntervalMs": 10 } }"#;
        let set = FixtureSet::from_json(json).unwrap();
        let script = set.import_script();
        assert_eq!(script.tick_interval_ms, 10);
        assert_eq!(script.step, 5);
        assert_eq!(script.events.len(), 4);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(FixtureSet::from_json("{ nope").is_err());
    }

    #[test]
    fn test_custom_provider() {
        struct Empty;
        impl FixtureProvider for Empty {
            fn search_entries(&self) -> Vec<SearchEntry> { vec![] }
            fn dashboard_rows(&self) -> Vec<TableRow> { vec![] }
            fn queue_items(&self) -> Vec<QueueItem> { vec![] }
            fn glossary_terms(&self) -> Vec<GlossaryTerm> { vec![] }
            fn import_script(&self) -> ImportScript { ImportScript::default() }
        }
        let provider: &dyn FixtureProvider = &Empty;
        assert!(crate::ValidationQueue::new(provider.queue_items()).is_empty());
        assert!(crate::SearchIndex::new(provider.search_entries()).filter("a").is_empty());
    }

    #[test]
    fn test_filter_glossary() {
        let terms = builtin_glossary_terms();
        assert_eq!(filter_glossary(&terms, "").len(), 8);
        let found = filter_glossary(&terms, "smtp");
        assert!(found.iter().any(|t| t.term == "SMTP"));
        assert!(filter_glossary(&terms, "zzzz").is_empty());
    }
}
