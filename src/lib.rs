pub mod app;
pub mod cli;
pub mod contact;
pub mod counter;
pub mod error;
pub mod events;
pub mod filter;
pub mod github;
pub mod languages;
pub mod models;
pub mod motion;
pub mod notify;
pub mod render;
pub mod showcase;
pub mod state;
pub mod stats;
pub mod typewriter;

pub use app::{run_showcase, ShowcasePage};
pub use error::{Result, ShowcaseError};
pub use github::GithubClient;
