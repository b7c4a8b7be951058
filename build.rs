use std::env;

// GStreamer.framework ships its own pkg-config files and dylibs on macOS.
const GST_FRAMEWORK_LIBS: &str = "/Library/Frameworks/GStreamer.framework/Libraries";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    if env::var("CARGO_CFG_TARGET_OS").as_deref() != Ok("macos") {
        return;
    }

    println!("cargo:rustc-env=MACOSX_DEPLOYMENT_TARGET=11.0");
    println!("cargo:rustc-link-search=framework=/Library/Frameworks");
    println!("cargo:rustc-link-arg=-Wl,-headerpad_max_install_names,-rpath,{GST_FRAMEWORK_LIBS}");
}
