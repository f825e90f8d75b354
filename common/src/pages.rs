//! ページ一覧とナビゲーション

use serde::Serialize;

/// ページに埋め込むシミュレータ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Embed {
    Dashboard,
    Import,
    Validation,
    Glossary,
}

/// ガイドの1ページ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    pub path: &'static str,
    pub title: &'static str,
    /// パンくずの表示名
    pub breadcrumb: &'static str,
    pub summary: &'static str,
    pub embed: Option<Embed>,
}

/// ルートパス
pub const HOME_PATH: &str = "/";

/// 未知のパスのパンくず
pub const FALLBACK_BREADCRUMB: &str = "Guida";

/// 全ページ（サイドバーの並び順）
pub const PAGES: &[Page] = &[
    Page {
        path: "/",
        title: "Benvenuto in Intelleo",
        breadcrumb: "Panoramica",
        summary: "La suite completa in azienda per la gestione automatizzata delle scadenze sui corsi di formazione e visite mediche.",
        embed: None,
    },
    Page {
        path: "/database",
        title: "Database & Dashboard",
        breadcrumb: "Database",
        summary: "Il cuore di Intelleo. Qui hai il controllo completo su tutti i certificati, le scadenze e lo stato di conformità della tua azienda.",
        embed: Some(Embed::Dashboard),
    },
    Page {
        path: "/import",
        title: "Importazione & AI",
        breadcrumb: "Importazione",
        summary: "Automatizza l'inserimento dati. Trascina i tuoi file e lascia che l'intelligenza artificiale faccia il lavoro pesante.",
        embed: Some(Embed::Import),
    },
    Page {
        path: "/validation",
        title: "Convalida Dati",
        breadcrumb: "Convalida",
        summary: "Il tuo centro di controllo qualità. Qui revisioni i documenti che l'AI ha analizzato ma che richiedono una conferma umana prima di entrare nel database.",
        embed: Some(Embed::Validation),
    },
    Page {
        path: "/calendar",
        title: "Scadenzario Grafico",
        breadcrumb: "Scadenzario",
        summary: "Visualizza le scadenze nel tempo con un diagramma di Gantt interattivo. Pianifica rinnovi e formazione con mesi di anticipo.",
        embed: None,
    },
    Page {
        path: "/employees",
        title: "Gestione Dipendenti",
        breadcrumb: "Dipendenti",
        summary: "Gestisci l'anagrafica del personale. Intelleo collega automaticamente i certificati alle persone giuste usando il nome e la matricola.",
        embed: None,
    },
    Page {
        path: "/security",
        title: "Sicurezza & Audit",
        breadcrumb: "Sicurezza",
        summary: "Proteggi i tuoi dati sensibili. Scopri come Intelleo garantisce l'integrità del database e traccia ogni operazione critica.",
        embed: None,
    },
    Page {
        path: "/settings",
        title: "Configurazione",
        breadcrumb: "Configurazione",
        summary: "Personalizza Intelleo per adattarlo alle esigenze della tua azienda. Gestisci notifiche email, soglie di allarme e percorsi di salvataggio.",
        embed: None,
    },
    Page {
        path: "/maintenance",
        title: "Backup & Manutenzione",
        breadcrumb: "Manutenzione",
        summary: "Proteggi il tuo lavoro. Impara a fare copie di sicurezza e a migrare Intelleo su un nuovo computer senza perdere dati.",
        embed: None,
    },
    Page {
        path: "/troubleshooting",
        title: "Risoluzione Problemi",
        breadcrumb: "Supporto",
        summary: "Soluzioni rapide per gli errori più comuni. Prima di chiamare l'assistenza, prova questi passaggi.",
        embed: None,
    },
    Page {
        path: "/glossary",
        title: "Glossario",
        breadcrumb: "Glossario",
        summary: "Le definizioni dei termini tecnici usati in Intelleo.",
        embed: Some(Embed::Glossary),
    },
    Page {
        path: "/shortcuts",
        title: "Scorciatoie da Tastiera",
        breadcrumb: "Scorciatoie",
        summary: "Diventa un power user. Risparmia tempo usando la tastiera invece del mouse.",
        embed: None,
    },
];

/// 旧リンクの別名
const ALIASES: &[(&str, &str)] = &[("/dashboard", "/database")];

/// 遷移先の抽象。Webはハッシュ、CLIは画面出力
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

/// パスを正規化（末尾スラッシュ除去、別名解決）
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim();
    let mut normalized = if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    };
    while normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, target)| target.to_string())
        .unwrap_or(normalized)
}

/// パスからページを引く
pub fn page_for(path: &str) -> Option<&'static Page> {
    let normalized = normalize_path(path);
    PAGES.iter().find(|p| p.path == normalized)
}

/// パンくず表示名
pub fn breadcrumb(path: &str) -> &'static str {
    page_for(path)
        .map(|p| p.breadcrumb)
        .unwrap_or(FALLBACK_BREADCRUMB)
}

/// ホーム以外のページ（機能カード用）
pub fn feature_pages() -> impl Iterator<Item = &'static Page> {
    PAGES.iter().filter(|p| p.path != HOME_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_lookup() {
        assert_eq!(page_for("/import").map(|p| p.title), Some("Importazione & AI"));
        assert_eq!(page_for("/import/").map(|p| p.path), Some("/import"));
        assert_eq!(page_for("glossary").map(|p| p.path), Some("/glossary"));
        assert!(page_for("/nowhere").is_none());
    }

    #[test]
    fn test_dashboard_alias() {
        let page = page_for("/dashboard").unwrap();
        assert_eq!(page.path, "/database");
        assert_eq!(page.embed, Some(Embed::Dashboard));
    }

    #[test]
    fn test_breadcrumbs() {
        assert_eq!(breadcrumb("/"), "Panoramica");
        assert_eq!(breadcrumb("/troubleshooting"), "Supporto");
        assert_eq!(breadcrumb("/unknown"), "Guida");
    }

    #[test]
    fn test_root_normalization() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("///"), "/");
    }

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<&str> = PAGES.iter().map(|p| p.path).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), PAGES.len());
        assert_eq!(feature_pages().count(), PAGES.len() - 1);
    }
}
