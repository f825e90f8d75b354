pub mod badge;
pub mod dashboard_simulator;
pub mod feedback_footer;
pub mod glossary;
pub mod header;
pub mod import_simulator;
pub mod note;
pub mod page_view;
pub mod progress_bar;
pub mod sidebar;
pub mod validation_simulator;
