//! Text for the about dialog.

pub const APP_NAME: &str = "Waresys";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutInfo {
    pub title: String,
    pub lines: Vec<String>,
}

impl AboutInfo {
    pub fn for_version(version: &str) -> Self {
        Self {
            title: APP_NAME.to_string(),
            lines: vec![
                "Warehouse inventory client.".to_string(),
                "Keeps track of items, their tags and the devices that read them.".to_string(),
                String::new(),
                format!("Version {version}"),
            ],
        }
    }

    /// About text for the running build.
    pub fn current() -> Self {
        Self::for_version(env!("CARGO_PKG_VERSION"))
    }
}
