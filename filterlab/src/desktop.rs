#![windows_subsystem = "windows"]

fn main() {
    if let Err(e) = filterlab::desktop_main() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}
