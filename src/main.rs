use flashq::{console::ConsoleError, FlashqError};

fn main() {
    env_logger::init();

    if let Err(err) = flashq::run() {
        match err {
            FlashqError::Console(ConsoleError::Io(err)) => eprintln!("IoError: {err}"),
            FlashqError::Console(ConsoleError::Eof) => eprintln!("Input closed unexpectedly"),
        }
        std::process::exit(1);
    }
}
