use std::{env, fs, path::PathBuf};

fn main() {
    // 1) Handle memory.x based on target
    let target = env::var("TARGET").unwrap_or_default();
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("cargo sets OUT_DIR"));

    if target.starts_with("thumbv6m") {
        // Pico 1: copy memory.x to OUT_DIR so the linker finds it
        let memory_x = fs::read_to_string("memory.x").expect("Failed to read memory.x");
        let dest = out_dir.join("memory.x");
        fs::write(&dest, memory_x).expect("Failed to write memory.x");
        println!("cargo:rustc-link-search={}", out_dir.display());
        println!("cargo:rerun-if-changed=memory.x");
    }

    // 2) Load optional env files (still supported for convenience)
    let _ = dotenvy::from_filename(".env");
    load_home_env(".pico.env");

    // 3) Provide a fallback so the clock can compile without .env
    let clock_start = env_or_default("CLOCK_START", "1200");
    if clock_start.len() != 4 || !clock_start.bytes().all(|byte| byte.is_ascii_digit()) {
        println!("cargo:warning=CLOCK_START should look like HHMM, got {clock_start:?}");
    }

    // 4) Expose as compile-time constants
    println!("cargo:rustc-env=CLOCK_START={clock_start}");

    // Optional: don't rebuild unless these change
    println!("cargo:rerun-if-env-changed=CLOCK_START");
    println!("cargo:rerun-if-changed=.env");
}

fn load_home_env(file: &str) {
    let home = match env::var_os("USERPROFILE").or_else(|| env::var_os("HOME")) {
        Some(path) => PathBuf::from(path),
        None => return,
    };
    let path = home.join(file);
    let _ = dotenvy::from_path(&path);
}

fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
