fn main() {
    env_logger::init();

    if let Err(error) = inpaint_rs::run_cli() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
