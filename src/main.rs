fn main() {
    // Run the CLI
    matizes_migrate::cli::run();
}
