fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");

    // Surfaced by `GET /api/health` and `quipster --version`
    println!(
        "cargo:rustc-env=QUIPSTER_BUILD_TIMESTAMP={}",
        chrono::Utc::now().to_rfc3339()
    );

    let hash = std::process::Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=QUIPSTER_GIT_HASH={hash}");
}
