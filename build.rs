fn main() {
    // Templates are compiled into the binary, so template edits need a rebuild.
    // Cargo watches a directory recursively when given its path.
    println!("cargo:rerun-if-changed=templates");
    println!("cargo:rerun-if-changed=build.rs");
}
