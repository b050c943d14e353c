use std::error::Error;

/// Tracks the build-time API base URL.
fn main() -> Result<(), Box<dyn Error>> {
    // `option_env!("DASHBOARD_API_URL")` is read at compile time, so a changed
    // value has to trigger a rebuild.
    println!("cargo:rerun-if-env-changed=DASHBOARD_API_URL");
    println!("cargo:rerun-if-changed=build.rs");

    Ok(())
}
