//! UI Components
//!
//! One module per screen, plus the shared shell, gates, and chart widgets.

mod analytics;
mod charts;
mod dashboard;
mod focus_music;
mod guards;
mod login;
mod nav;
mod notes;
mod planner;
mod sign_up;

pub use analytics::Analytics;
pub use charts::{BarChart, LineChart, PieChart};
pub use dashboard::Dashboard;
pub use focus_music::FocusMusic;
pub use guards::{RedirectIfSession, RequireSession};
pub use login::Login;
pub use nav::NavShell;
pub use notes::Notes;
pub use planner::Planner;
pub use sign_up::SignUp;
