use clap::{crate_description, crate_name, crate_version, Arg, Command};
use std::io::{self, Write};

// The CLI layer should only parse inputs and forward them to library code.
fn main() {
    steier::logging::init();

    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .arg(Arg::new("name").help("Project name; prompted for on stdin when omitted"))
        .get_matches();

    let name = match matches.get_one::<String>("name") {
        Some(name) => name.clone(),
        None => match prompt_for_name() {
            Ok(name) => name,
            Err(error) => {
                log::error!("Unable to read the project name: {}", error);
                std::process::exit(1);
            }
        },
    };

    if let Err(error) = steier::scaffold_project(&name) {
        log::error!("Scaffolding failed.");
        eprintln!("{:?}", miette::Report::new(error));
        std::process::exit(1);
    }

    log::info!("Scaffolding completed successfully.");
}

// One line from stdin; trimming happens during validation.
fn prompt_for_name() -> io::Result<String> {
    print!("Enter the project name: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    Ok(line)
}
