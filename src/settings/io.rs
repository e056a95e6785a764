use bevy::log::info;
use directories_next::ProjectDirs;
use std::fs;
use std::io::{self, BufReader, ErrorKind};
use std::path::PathBuf;

const QUALIFIER: &str = "com";
const ORGANIZATION: &str = "OrderDeskApp";
const APPLICATION: &str = "OrderDesk";
const CONFIG_FILE: &str = "orderdesk_settings.json";

fn get_config_path() -> io::Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION) {
        Ok(proj_dirs.config_dir().join(CONFIG_FILE))
    } else {
        Err(io::Error::new(
            ErrorKind::NotFound,
            "Could not determine project directories for app settings.",
        ))
    }
}

pub fn load_settings_from_file<T: for<'de> serde::de::Deserialize<'de> + Default>() -> io::Result<T>
{
    let config_file = get_config_path()?;
    match fs::File::open(&config_file) {
        Ok(file) => {
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).map_err(|e| {
                io::Error::new(
                    ErrorKind::InvalidData,
                    format!("Failed to parse settings file {:?}: {}", config_file, e),
                )
            })
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(
                "AppSettings: settings file not found at {:?}, using defaults.",
                config_file
            );
            Ok(Default::default())
        }
        Err(e) => Err(e),
    }
}
