//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `NavBar`: navigation tabs with the active entry highlighted
//! - `TitleBar`: writer page heading
//! - `SendButton`: submit control, dimmed when disabled
//! - `LandingPage`, `InfoPage`: static pages
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `InputBox`: prompt textarea
//! - `ArticlePanel`: result view with skeleton loading and scrolling
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as props, never by reaching into the
//! core `App`. This keeps dependencies explicit and components testable.
//!
//! ```text
//! components/
//! ├── mod.rs
//! ├── nav_bar.rs
//! ├── title_bar.rs
//! ├── send_button.rs
//! ├── article_panel.rs
//! ├── landing.rs
//! ├── info_page.rs
//! └── input_box/
//! ```

pub mod article_panel;
pub mod info_page;
pub mod input_box;
pub mod landing;
pub mod nav_bar;
pub mod send_button;
pub mod title_bar;

pub use article_panel::{ArticlePanel, ArticlePanelState};
pub use info_page::InfoPage;
pub use input_box::{InputBox, InputEvent};
pub use landing::LandingPage;
pub use nav_bar::NavBar;
pub use send_button::SendButton;
pub use title_bar::TitleBar;
