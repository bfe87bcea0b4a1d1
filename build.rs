fn main() {
    // 1. An explicit HOSPITALS_NEARBY_BUILD_VERSION in the build environment wins
    println!("cargo:rerun-if-env-changed=HOSPITALS_NEARBY_BUILD_VERSION");
    if let Ok(v) = std::env::var("HOSPITALS_NEARBY_BUILD_VERSION") {
        if !v.is_empty() {
            println!("cargo:rustc-env=HOSPITALS_NEARBY_BUILD_VERSION={v}");
            return;
        }
    }

    // 2. Try git describe
    if let Ok(output) = std::process::Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
    {
        if output.status.success() {
            let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
            // Strip 'v' prefix (e.g., "v0.2.0" -> "0.2.0")
            let version = version.strip_prefix('v').unwrap_or(&version);
            println!("cargo:rustc-env=HOSPITALS_NEARBY_BUILD_VERSION={version}");
            // Rerun when git state changes
            println!("cargo:rerun-if-changed=.git/HEAD");
            println!("cargo:rerun-if-changed=.git/refs/tags");
            return;
        }
    }

    // 3. Fallback to Cargo.toml version
    println!(
        "cargo:rustc-env=HOSPITALS_NEARBY_BUILD_VERSION={}",
        std::env::var("CARGO_PKG_VERSION").unwrap()
    );
}
