fn main() {
    if let Err(error) = guess_the_chd::run() {
        eprintln!("guess-the-chd error: {error:#}");
        std::process::exit(1);
    }
}
