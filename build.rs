use std::env::var;
use std::io::Write;

#[path = "build/resolution.rs"]
mod resolution;

use resolution::{resolve, Engine, TargetInfo, RULES};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=build/resolution.rs");

    // `snprintf` is defined with a C-variadic signature, which needs
    // `c_variadic`. Fail here with a readable message rather than deep in
    // the crate.
    if !has_feature("c_variadic") {
        panic!("snprintf-shim needs a nightly rustc with `#![feature(c_variadic)]`");
    }

    let values = Engine::ALL
        .iter()
        .map(|engine| format!("\"{}\"", engine.cfg_value()))
        .collect::<Vec<_>>()
        .join(", ");
    println!("cargo:rustc-check-cfg=cfg(snprintf_engine, values({}))", values);
    println!("cargo:rustc-check-cfg=cfg(snprintf_host_vsnprintf)");

    let target = TargetInfo::from_env();
    let engine = match resolve(&target, RULES, feature_enabled) {
        Ok(engine) => engine,
        Err(err) => panic!("{}", err),
    };

    // The host `vsnprintf` stays available when an override replaces it, so
    // the stand-in and the comparison tests still build.
    let native = resolve(&target, RULES, |_| false).ok();

    println!("cargo:rustc-cfg=snprintf_engine=\"{}\"", engine.cfg_value());
    if engine.uses_host_vsnprintf() || native.map_or(false, Engine::uses_host_vsnprintf) {
        use_feature("snprintf_host_vsnprintf");
    }
    println!("cargo:rustc-env=SNPRINTF_SHIM_ENGINE={}", engine.cfg_value());
}

fn use_feature(feature: &str) {
    println!("cargo:rustc-cfg={}", feature);
}

/// Cargo exposes enabled features as `CARGO_FEATURE_<NAME>` variables.
fn feature_enabled(feature: &str) -> bool {
    let name = feature.to_uppercase().replace('-', "_");
    var(format!("CARGO_FEATURE_{}", name)).is_ok()
}

/// Test whether the rustc at `var("RUSTC")` supports the given feature.
fn has_feature(feature: &str) -> bool {
    let out_dir = var("OUT_DIR").unwrap();
    let rustc = var("RUSTC").unwrap();

    let mut child = std::process::Command::new(rustc)
        .arg("--crate-type=rlib") // Don't require `main`.
        .arg("--emit=metadata") // Do as little as possible but still parse.
        .arg("--out-dir")
        .arg(out_dir) // Put the output somewhere inconsequential.
        .arg("-") // Read from stdin.
        .stdin(std::process::Stdio::piped()) // Stdin is a pipe.
        .spawn()
        .unwrap();

    writeln!(child.stdin.take().unwrap(), "#![feature({})]", feature).unwrap();

    child.wait().unwrap().success()
}
