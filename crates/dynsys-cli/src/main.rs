#![forbid(unsafe_code)]

fn main() {
    if let Err(error) = dynsys_cli::run_from_env() {
        let code = dynsys_cli::output::report_error(&mut std::io::stderr().lock(), &error);
        std::process::exit(code);
    }
}
