// File: crates/fitness-chart/build.rs
// Summary: Links the Windows system libraries Skia/ICU need when rendering on Windows.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW and friends come from advapi32.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
