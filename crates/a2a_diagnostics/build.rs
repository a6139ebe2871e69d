use std::path::PathBuf;

#[path = "build/lockfile.rs"]
mod lockfile;

use lockfile::locked_version;

// Packages whose resolved versions are exported as `A2A_DEP_VERSION_<NAME>`.
const REPORTED: &[&str] = &["reqwest", "tokio", "colored", "reedline", "clap"];

fn main() {
    let Some(manifest_dir) = std::env::var_os("CARGO_MANIFEST_DIR").map(PathBuf::from) else {
        return;
    };
    let lock_file = manifest_dir.join("../../Cargo.lock");
    println!("cargo:rerun-if-changed={}", lock_file.display());

    let Ok(lock) = std::fs::read_to_string(&lock_file) else {
        return;
    };

    for package in REPORTED {
        if let Some(version) = locked_version(&lock, package) {
            println!(
                "cargo:rustc-env=A2A_DEP_VERSION_{}={}",
                package.to_uppercase(),
                version
            );
        }
    }
}
