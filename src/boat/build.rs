use vergen::EmitBuilder;

fn main() {
    if let Err(e) = EmitBuilder::builder()
        .all_build()
        .all_cargo()
        .all_git()
        .all_rustc()
        .all_sysinfo()
        .emit()
    {
        // builds from a source tarball have no git metadata to describe
        println!("cargo:warning=failed to gather build metadata: {}", e);
        println!("cargo:rustc-env=VERGEN_GIT_DESCRIBE=unknown");
    }
}
