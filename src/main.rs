fn main() {
    build_runner::app::cli::run();
}
