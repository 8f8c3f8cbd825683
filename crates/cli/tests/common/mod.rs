#![allow(dead_code)]

use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

pub const IN_PROCESS: &str = "name: Demo
sync_interfaces: [IDemo]
";

pub const OUT_OF_PROCESS: &str = "name: Demo
sync_interfaces: [IDemo, IDemoExtra, IConfiguration]
notifying_interfaces: [IDemo]
out_of_process: true
has_config: true
";

/// `skelgen` with HOME pointed at `home`, so no user configuration leaks in.
pub fn skelgen(home: &Path) -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("skelgen")?;
    cmd.env("HOME", home).env("APPDATA", home);
    Ok(cmd)
}

pub fn write_descriptor(dir: &Path, name: &str, text: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, text)?;
    Ok(path)
}
