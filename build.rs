fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // An explicit SITE_BUILD_MODE wins, otherwise release builds deploy to the subpath
    let build_mode = std::env::var("SITE_BUILD_MODE").unwrap_or_else(|_| {
        match std::env::var("PROFILE").as_deref() {
            Ok("release") => "production".to_string(),
            _ => "development".to_string(),
        }
    });
    println!("cargo:rustc-env=SITE_BUILD_MODE={}", build_mode);

    println!("cargo:rerun-if-env-changed=SITE_BUILD_MODE");
    println!("cargo:rerun-if-changed=build.rs");
}
