use std::process;

fn main() {
    if let Err(err) = maxstack::run() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
