fn main() {
    metagrab::cli::run();
}
