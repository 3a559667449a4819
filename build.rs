use clap::CommandFactory;
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

fn main() -> io::Result<()> {
    // Generate manpage using clap_mangen
    let cmd = datasetra_cli::Args::command();
    let man = clap_mangen::Man::new(cmd);
    let mut buffer: Vec<u8> = Default::default();
    man.render(&mut buffer)?;

    let out_dir = match env::var("OUT_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => return Ok(()),
    };

    let dest_path = out_dir.join("datasetra.1");
    fs::write(&dest_path, &buffer)?;

    // OUT_DIR is typically target/release/build/xxx/out; three levels up is target/release/
    if env::var("PROFILE").unwrap_or_default() == "release" {
        if let Some(release_dir) = out_dir.ancestors().nth(3) {
            fs::write(release_dir.join("datasetra.1"), &buffer)?;
        }
    }

    println!("cargo:rerun-if-changed=crates/datasetra-cli/src/lib.rs");
    Ok(())
}
