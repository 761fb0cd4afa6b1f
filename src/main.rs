use pipequiz::cli::run;

fn main() {
    if let Err(e) = run() {
        // I/O failures are internal; everything else is a user error (bad rc file, bad arguments)
        let is_internal = e.chain().any(|cause| cause.is::<std::io::Error>());
        if is_internal {
            eprintln!("Internal error: {}", e);
            // Show error chain if available
            let mut source = e.source();
            if source.is_some() {
                eprintln!("\nCaused by:");
                let mut indent = 1;
                while let Some(err) = source {
                    eprintln!("{:indent$}  {}", "", err);
                    source = err.source();
                    indent += 1;
                }
            }
            std::process::exit(2);
        } else {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
