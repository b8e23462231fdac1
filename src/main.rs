fn main() {
    if let Err(e) = kokoro_motion_lib::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
