fn main() {
    // Run the CLI
    std::process::exit(rustyll_toc::cli::run());
}
