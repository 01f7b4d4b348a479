fn main() {
    calws::app::cli::run();
}
