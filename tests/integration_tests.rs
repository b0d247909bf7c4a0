//! Integration tests for `deckshortcuts`
//!
//! Tests the full writer and reader paths against temporary Steam userdata
//! trees: database creation, appending, discovery, and rejection of
//! malformed files.

use deckshortcuts::appid;
use deckshortcuts::config::{ConfigManager, ShortcutConfig};
use deckshortcuts::error::ShortcutsError;
use deckshortcuts::shortcuts::{ShortcutEntry, ShortcutsDatabase};
use deckshortcuts::steam::locator::{discover_users_in, find_shortcuts_files_in};
use std::fs;
use std::path::Path;

/// Build a userdata tree with one numeric user, returning its config dir
fn make_user(root: &Path, id: &str) -> std::path::PathBuf {
    let config = root.join(id).join("config");
    fs::create_dir_all(&config).unwrap();
    config
}

fn minecraft_entry(config_dir: &Path) -> ShortcutEntry {
    let app_name = "Minecraft Splitscreen";
    let exe = "/home/deck/.local/share/PollyMC/minecraft.sh";
    let app_id = appid::app_id(app_name, exe);
    ShortcutEntry {
        app_id,
        app_name: app_name.to_string(),
        exe: exe.to_string(),
        start_dir: "/home/deck/.local/share/PollyMC".to_string(),
        icon: config_dir
            .join("grid")
            .join(format!("{app_id}_icon.ico"))
            .to_string_lossy()
            .into_owned(),
        launch_options: String::new(),
    }
}

/// Starting from no file at all, appending the Minecraft entry yields a
/// single-entry database with index 0 and the expected appid
#[test]
fn test_end_to_end_first_append() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = make_user(&dir.path().join("userdata"), "1001");

    let db = ShortcutsDatabase::new(config_dir.join("shortcuts.vdf"));
    let entry = minecraft_entry(&config_dir);
    let index = db.append(&entry).unwrap();
    assert_eq!(index, 0);

    let entries = db.load().unwrap();
    assert_eq!(entries.len(), 1);
    let (index, loaded) = &entries[0];
    assert_eq!(*index, 0);
    assert_eq!(loaded.app_id, 0x8BD5_69E7);
    assert_eq!(loaded.app_name, "Minecraft Splitscreen");
    assert_eq!(loaded.exe, "/home/deck/.local/share/PollyMC/minecraft.sh");
    assert_eq!(loaded.start_dir, "/home/deck/.local/share/PollyMC");

    // the file keeps the closing terminators as its suffix
    let bytes = fs::read(db.path()).unwrap();
    assert!(bytes.ends_with(&[0x08, 0x08]));
}

/// Repeated appends keep assigning fresh indices and never disturb the
/// entries already present
#[test]
fn test_repeated_appends_accumulate() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = make_user(&dir.path().join("userdata"), "1001");
    let db = ShortcutsDatabase::new(config_dir.join("shortcuts.vdf"));

    let before_len = {
        db.append(&minecraft_entry(&config_dir)).unwrap();
        fs::read(db.path()).unwrap().len()
    };
    let index = db.append(&minecraft_entry(&config_dir)).unwrap();
    assert_eq!(index, 1);

    let after = fs::read(db.path()).unwrap();
    assert!(after.len() > before_len);
    assert_eq!(db.load().unwrap().len(), 2);
}

/// A database missing its closing terminators is rejected and the file is
/// left byte-for-byte unchanged
#[test]
fn test_malformed_database_is_rejected_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = make_user(&dir.path().join("userdata"), "1001");
    let path = config_dir.join("shortcuts.vdf");

    let garbage = b"not a shortcuts database".to_vec();
    fs::write(&path, &garbage).unwrap();

    let db = ShortcutsDatabase::new(&path);
    let err = db.append(&minecraft_entry(&config_dir)).unwrap_err();
    assert!(matches!(err, ShortcutsError::StructureNotRecognized));
    assert_eq!(fs::read(&path).unwrap(), garbage);
}

/// Two numeric user directories with databases are both discovered; users
/// without a database are discovered but contribute no file
#[test]
fn test_discovery_across_users() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("userdata");

    for id in ["1001", "1002"] {
        let config_dir = make_user(&root, id);
        let db = ShortcutsDatabase::new(config_dir.join("shortcuts.vdf"));
        db.append(&minecraft_entry(&config_dir)).unwrap();
    }
    make_user(&root, "1003"); // no database
    fs::create_dir_all(root.join("not-a-user")).unwrap();

    let users = discover_users_in(std::slice::from_ref(&root));
    assert_eq!(users.len(), 3);

    let files = find_shortcuts_files_in(std::slice::from_ref(&root));
    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|p| p.exists()));
}

/// The reader copes with databases written by the Steam client itself,
/// which uses capitalized field keys and extra fields
#[test]
fn test_reader_handles_client_written_database() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = make_user(&dir.path().join("userdata"), "1001");
    let path = config_dir.join("shortcuts.vdf");

    let mut bytes: Vec<u8> = Vec::new();
    bytes.extend_from_slice(b"\x00shortcuts\x00");
    bytes.extend_from_slice(b"\x000\x00");
    bytes.extend_from_slice(b"\x02appid\x00\x01\x00\x00\x80");
    bytes.extend_from_slice(b"\x01AppName\x00Client Game\x00");
    bytes.extend_from_slice(b"\x01Exe\x00\"/usr/bin/game\"\x00");
    bytes.extend_from_slice(b"\x01LaunchOptions\x00--fullscreen\x00");
    bytes.extend_from_slice(b"\x02IsHidden\x00\x00\x00\x00\x00");
    bytes.push(0x08);
    bytes.extend_from_slice(&[0x08, 0x08]);
    fs::write(&path, &bytes).unwrap();

    let entries = ShortcutsDatabase::new(&path).load().unwrap();
    assert_eq!(entries.len(), 1);
    let (_, entry) = &entries[0];
    assert_eq!(entry.app_id, 0x8000_0001);
    assert_eq!(entry.app_name, "Client Game");
    assert_eq!(entry.exe, "\"/usr/bin/game\"");
    assert_eq!(entry.launch_options, "--fullscreen");
}

/// Config round-trips through an explicit path and feeds the writer's entry
#[test]
fn test_config_file_drives_the_entry() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");

    let config = ShortcutConfig {
        app_name: "Celeste".to_string(),
        exe: "/home/deck/games/celeste.sh".to_string(),
        start_dir: "/home/deck/games".to_string(),
        ..ShortcutConfig::default()
    };
    ConfigManager::save_to(&config, &config_path).unwrap();
    let loaded = ConfigManager::load_from(&config_path).unwrap();

    let config_dir = make_user(&dir.path().join("userdata"), "1001");
    let db = ShortcutsDatabase::new(config_dir.join("shortcuts.vdf"));
    let entry = ShortcutEntry {
        app_id: appid::app_id(&loaded.app_name, &loaded.exe),
        app_name: loaded.app_name.clone(),
        exe: loaded.exe.clone(),
        start_dir: loaded.start_dir.clone(),
        icon: String::new(),
        launch_options: String::new(),
    };
    db.append(&entry).unwrap();

    let entries = db.load().unwrap();
    assert_eq!(entries[0].1.app_name, "Celeste");
    assert_eq!(
        entries[0].1.app_id,
        appid::app_id("Celeste", "/home/deck/games/celeste.sh")
    );
    assert!(entries[0].1.app_id & 0x8000_0000 != 0);
}
