fn main() {
    // Only embed the bundle plist on macOS targets
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("macos") {
        let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_default();
        let plist = format!("{}/resources/macos/Info.plist", manifest_dir);
        println!("cargo:rerun-if-changed=resources/macos/Info.plist");
        // Gives the bare binary a bundle identifier for NSBundle/UserNotifications
        println!(
            "cargo:rustc-link-arg-bins=-Wl,-sectcreate,__TEXT,__info_plist,{}",
            plist
        );
    }
}
