use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Rxcheck";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filename of the bundled interaction dataset.
pub const DATASET_FILE: &str = "db_drug_interactions.csv";

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "info"
}

/// Get the application data directory
/// ~/Rxcheck/ on all platforms (user-visible)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Rxcheck")
}

/// Default location of the interaction dataset.
pub fn default_dataset_path() -> PathBuf {
    app_data_dir().join(DATASET_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("Rxcheck"));
    }

    #[test]
    fn dataset_path_under_app_data() {
        let path = default_dataset_path();
        assert!(path.starts_with(app_data_dir()));
        assert!(path.ends_with(DATASET_FILE));
    }

    #[test]
    fn app_name_is_rxcheck() {
        assert_eq!(APP_NAME, "Rxcheck");
    }
}
