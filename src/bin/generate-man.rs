// Write the pipequiz man page to the given directory (default: current directory)

use clap::CommandFactory;
use pipequiz::cli::Cli;
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)?;

    let man = clap_mangen::Man::new(Cli::command());
    let mut buffer: Vec<u8> = Vec::new();
    man.render(&mut buffer)?;

    let path = out_dir.join("pipequiz.1");
    std::fs::write(&path, buffer)?;
    println!("Wrote {}", path.display());
    Ok(())
}
