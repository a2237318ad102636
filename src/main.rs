fn main() {
    depgen::app::cli::run();
}
