#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub const PORT_RECORD: &str = r#"
id = "2"
name = "Pharmacie du Port"
address = "Boulevard de la Mer, Harhoura"
phone = "+212537654321"
latitude = 33.955
longitude = -6.91

[opening_hours]
lun = { open = "09:00", close = "21:00" }
mar = { open = "09:00", close = "21:00" }
mer = { open = "09:00", close = "21:00" }
jeu = { open = "09:00", close = "21:00" }
ven = { open = "09:00", close = "21:00" }
sam = { open = "09:00", close = "21:00" }
dim = { open = "10:00", close = "13:00" }
"#;

pub fn pharmadir_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pharmadir").unwrap();
    cmd.env_remove("PHARMADIR_ROOT");
    cmd.env_remove("PHARMADIR_LANG");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Initialize a directory holding the demo record
pub fn init_with_demo(root: &Path) {
    pharmadir_cmd()
        .arg("init")
        .arg(root)
        .arg("--demo")
        .assert()
        .success();
}

pub fn write_record(root: &Path, name: &str, contents: &str) {
    let data_dir = root.join("pharmacies");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(data_dir.join(name), contents).unwrap();
}
