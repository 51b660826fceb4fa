fn main() {
    mole_cli::logging::init();

    if let Err(err) = mole_cli::run() {
        // errors go to stdout, matching the exported rows
        println!("{}", err.to_string().trim_end());
        std::process::exit(1);
    }
}
