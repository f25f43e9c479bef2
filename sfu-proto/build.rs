fn main() -> std::io::Result<()> {
    // `stream.video.sfu.rs` is checked in. It is only regenerated when the
    // `GENERATE_PROTO` environment variable is set, which is meant for
    // developers editing `sfu.proto`.
    if std::env::var("GENERATE_PROTO").is_err() {
        println!("cargo:rerun-if-changed=build.rs");
        return Ok(());
    }

    println!("cargo:rerun-if-changed=src/sfu.proto");
    println!("cargo:warning=GENERATE_PROTO is set, regenerating proto definitions...");

    let mut config = prost_build::Config::new();
    config.type_attribute(".", "#[derive(serde::Serialize, serde::Deserialize)]");

    // Output next to the sources so the result can be version-controlled.
    config.out_dir("src/");

    config.compile_protos(&["src/sfu.proto"], &["src/"])?;
    Ok(())
}
