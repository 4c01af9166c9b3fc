//! Retrieves information about the version of the tool from Git and the build
//! environment. `shadow-rs` writes it to the output directory and it is
//! included in the library as the `build` module.

fn main() -> shadow_rs::SdResult<()> {
    shadow_rs::new()
}
