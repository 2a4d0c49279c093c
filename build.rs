use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=config.toml");

    // Ship config.toml next to the compiled binary so the app finds it
    // regardless of the working directory.
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let target_dir = out_dir
        .ancestors()
        .nth(3)
        .expect("unexpected OUT_DIR layout")
        .to_path_buf();

    fs::copy("config.toml", target_dir.join("config.toml")).unwrap();
}
