//! skillsync-render — HTML views and CSV export for assessment lists.

pub mod export;
pub mod html;

pub use export::{write_csv, write_csv_file};
pub use html::{generate_page, render_banner, render_card, render_view, write_html_page};
