fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=cbindgen.toml");

    // Only the C ABI needs a header
    if std::env::var("CARGO_FEATURE_FFI").is_err() {
        return;
    }

    let crate_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => dir,
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {e}");
            return;
        }
    };
    let out_dir = std::path::Path::new(&crate_dir).join("include");

    if let Err(e) = std::fs::create_dir_all(&out_dir) {
        println!("cargo:warning=Failed to create include directory: {e}");
        return;
    }

    let header_path = out_dir.join("fast_math_rs.h");

    let config_path = std::path::Path::new(&crate_dir).join("cbindgen.toml");
    let config = match cbindgen::Config::from_file(&config_path) {
        Ok(config) => config,
        Err(e) => {
            println!("cargo:warning=Failed to load cbindgen.toml: {e}");
            return;
        }
    };

    // cbindgen panics on some type shapes it cannot map; treat that like an error
    let generated = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        cbindgen::Builder::new()
            .with_crate(&crate_dir)
            .with_config(config)
            .generate()
    }));

    match generated {
        Ok(Ok(bindings)) => {
            bindings.write_to_file(header_path);
        }
        Ok(Err(e)) => {
            println!("cargo:warning=Unable to generate bindings: {e}");
            println!(
                "cargo:warning=Hint: check crate-level doc comments in src/lib.rs (should be a plain string literal)"
            );
        }
        Err(_) => {
            println!("cargo:warning=cbindgen panicked while generating bindings, header not written");
        }
    }
}
