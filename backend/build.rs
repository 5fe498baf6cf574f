use std::fs;
use std::path::Path;

// Embeds the frontend bundle: copies `../frontend/dist` to `static/dist`
// when a build exists, otherwise leaves a placeholder page so the server
// still compiles.
fn main() {
    let out_dir = Path::new("static");
    let embedded = out_dir.join("dist");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(&embedded);
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true),
        )
        .unwrap();
    } else if !embedded.join("index.html").exists() {
        fs::create_dir_all(&embedded).unwrap();
        fs::write(
            embedded.join("index.html"),
            "<!DOCTYPE html><html><body><p>Frontend not built. Run <code>trunk build</code> in <code>frontend/</code> and rebuild the server.</p></body></html>",
        )
        .unwrap();
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
