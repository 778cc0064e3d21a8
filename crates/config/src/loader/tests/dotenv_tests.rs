//! `.env` loading gate tests.

use serial_test::serial;

use super::env_lock;
use crate::loader::builder::ConfigLoader;

#[test]
#[serial]
fn test_dotenv_disabled_skips_loading() {
    let _lock = env_lock().lock().unwrap();
    temp_env::with_vars([("DOTENV_DISABLED", Some("1"))], || {
        assert!(ConfigLoader::new().load_dotenv().is_ok());
    });
}

#[test]
#[serial]
fn test_dotenv_missing_file_is_ignored() {
    let _lock = env_lock().lock().unwrap();
    let dir = tempfile::TempDir::new().unwrap();
    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let result = temp_env::with_vars([("DOTENV_DISABLED", None::<&str>)], || {
        ConfigLoader::new().load_dotenv().map(|_| ())
    });
    std::env::set_current_dir(original).unwrap();
    assert!(result.is_ok());
}
