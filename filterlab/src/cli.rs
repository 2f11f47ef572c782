fn main() {
    // Invalid answers are reported by the menu itself and still exit with 0.
    if let Err(e) = filterlab::cli_main() {
        log::error!("{e:?}");
    }
}
