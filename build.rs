fn main() {
    // Capture the build date
    let now = chrono::Utc::now();

    // Read by env! for the footer's copyright year
    println!("cargo:rustc-env=BUILD_YEAR={}", now.format("%Y"));

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
