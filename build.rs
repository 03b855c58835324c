use std::env;
use std::fs;
use std::path::{Path, PathBuf};

// Copy the default global settings from /src next to our resulting executable
pub fn main() {
    println!("cargo:rerun-if-changed=src/config.toml");

    let manifest_dir = env::var_os("CARGO_MANIFEST_DIR");
    let out_dir = env::var_os("OUT_DIR");
    let (manifest_dir, out_dir) = match (manifest_dir, out_dir) {
        (Some(manifest_dir), Some(out_dir)) => {
            (PathBuf::from(manifest_dir), PathBuf::from(out_dir))
        }
        _ => {
            println!(
                "cargo:warning=CARGO_MANIFEST_DIR or OUT_DIR missing, not copying config.toml"
            );
            return;
        }
    };

    // OUT_DIR is target/<profile>/build/<crate>-<hash>/out
    let exe_dir = match out_dir.ancestors().nth(3) {
        Some(dir) => dir,
        None => return,
    };

    let config_file = manifest_dir.join("src").join("config.toml");
    let dest_file = Path::new(exe_dir).join("config.toml");
    if dest_file.exists() {
        return;
    }
    match fs::copy(&config_file, &dest_file) {
        Ok(_) => println!(
            "Copied config file successfully from {:?} to {:?}",
            config_file, dest_file
        ),
        Err(e) => println!(
            "cargo:warning=Failed to copy config file from {:?} to {:?}: {:?}",
            config_file, dest_file, e
        ),
    }
}
