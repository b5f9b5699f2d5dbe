use clap::{arg, crate_version, Command};
use bmpstego::{error::Error, recent_files, stego};

const RCH: &str = "unreachable was reached";
const RECENT_FILES_PATH: &str = ".bmpstego_recent";

/// Map an `Error` to a stable negative process exit code, so a wrapping
/// shell script can distinguish failure classes without parsing stderr.
fn exit_code(err: &Error) -> i32 {
    match err {
        Error::FileError(_) => -1,
        Error::FormatError(_) => -2,
        Error::EmptyMessage => -3,
        Error::MessageTooLarge => -4,
        Error::CapacityError => -5,
        Error::CompressionError(_) => -6,
        Error::InvalidPayload => -7,
    }
}

fn main() {
    env_logger::init();

    let long_help =
"Examples:
---------
Hide a message:    `bmpstego encode -i carrier.bmp -o out.bmp -m \"meet at dawn\"`
Recover a message: `bmpstego decode -i out.bmp`";

    let mut main_cmd = Command::new("bmpstego")
        .about("Hide or recover a text message in a 24-bit bitmap")
        .after_long_help(long_help)
        .version(crate_version!());
    main_cmd = main_cmd.subcommand(Command::new("encode")
        .arg(arg!(-i --input <PATH> "carrier bitmap to hide the message in").required(true))
        .arg(arg!(-o --output <PATH> "path to write the carrier with the hidden message").required(true))
        .arg(arg!(-m --message <TEXT> "message to hide").required(true))
        .about("hide a message in a bitmap"));
    main_cmd = main_cmd.subcommand(Command::new("decode")
        .arg(arg!(-i --input <PATH> "carrier bitmap to recover the message from").required(true))
        .arg(arg!(-o --output [PATH] "path to write the recovered message to (default: stdout)"))
        .about("recover a message hidden in a bitmap"));

    let matches = main_cmd.get_matches();
    let result = run(&matches);

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(exit_code(&err));
    }
}

fn run(matches: &clap::ArgMatches) -> Result<(), Error> {
    if let Some(cmd) = matches.subcommand_matches("encode") {
        let path_in = cmd.get_one::<String>("input").expect(RCH);
        let path_out = cmd.get_one::<String>("output").expect(RCH);
        let message = cmd.get_one::<String>("message").expect(RCH);
        stego::encode(path_in, path_out, message)?;
        if let Err(e) = recent_files::record(RECENT_FILES_PATH, path_in) {
            log::warn!("could not update recent-files list: {e}");
        }
        log::info!("wrote {path_out}");
    }

    if let Some(cmd) = matches.subcommand_matches("decode") {
        let path_in = cmd.get_one::<String>("input").expect(RCH);
        let message = stego::decode(path_in)?;
        if let Err(e) = recent_files::record(RECENT_FILES_PATH, path_in) {
            log::warn!("could not update recent-files list: {e}");
        }
        match cmd.get_one::<String>("output") {
            Some(path_out) => std::fs::write(path_out, &message).map_err(Error::FileError)?,
            None => println!("{message}"),
        }
    }

    Ok(())
}
