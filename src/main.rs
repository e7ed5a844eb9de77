fn main() {
    if let Err(e) = input_replay_lib::run() {
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}
