use std::error::Error;
use vergen::EmitBuilder;

// Embeds `git describe` as VERGEN_GIT_DESCRIBE; builds outside a git checkout
// report "unknown" instead.
fn main() -> Result<(), Box<dyn Error>> {
    let emitted = EmitBuilder::builder()
        .fail_on_error()
        .git_describe(true, true, None)
        .emit();
    if emitted.is_err() {
        println!("cargo:rustc-env=VERGEN_GIT_DESCRIBE=unknown");
    }
    Ok(())
}
