fn main() {
    promptcard::app::cli::run();
}
