use panchanga::error::PanchangaError;

mod cli;

fn main() {
    match cli::run() {
        Ok(()) => {}
        Err(e @ PanchangaError::PlaceNotFound { .. }) => {
            eprint!("{}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
