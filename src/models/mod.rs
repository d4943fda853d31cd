pub mod entry;
pub mod settings;
pub mod state;
pub mod summary;
pub mod work_type;

pub use entry::WorkEntry;
pub use settings::{FreelanceSettings, SettingsUpdate};
pub use state::PersistedState;
pub use summary::MonthSummary;
pub use work_type::WorkType;
