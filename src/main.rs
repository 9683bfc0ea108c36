use brewery::{Console, Homebrew, Runner};

fn main() {
    // argv[0] is the program name; everything after it belongs to the user.
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut runner = Runner::new(Console, Box::new(Homebrew::default()));
    std::process::exit(runner.dispatch(&args));
}
