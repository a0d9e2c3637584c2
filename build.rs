//! Build script for matrix-clock: installs the right memory.x for thumb targets.

use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rustc-check-cfg=cfg(rust_analyzer)");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR must be set"));
    let target = env::var("TARGET").expect("TARGET must be set");

    if target.starts_with("thumbv6m") {
        // Pico 1 W
        install_memory_x(&out_dir, "memory-pico1w.x");
    } else if target.starts_with("thumbv8m") {
        // Pico 2 W ARM core
        install_memory_x(&out_dir, "memory-pico2.x");
    }
}

fn install_memory_x(out_dir: &PathBuf, source: &str) {
    let memory_x =
        fs::read_to_string(source).unwrap_or_else(|_| panic!("Failed to read {source}"));
    let dest = out_dir.join("memory.x");
    fs::write(&dest, memory_x).expect("Failed to write memory.x");
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed={source}");
}
