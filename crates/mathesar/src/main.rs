fn main() {
    std::process::exit(mathesar_cli::run_cli(std::env::args().collect()));
}
