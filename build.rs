fn main() {
    // Shown in the footer as the last deploy time
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    println!("cargo:rerun-if-changed=build.rs");
    // content/ is embedded, so edits there should refresh the stamp too
    println!("cargo:rerun-if-changed=content");
}
