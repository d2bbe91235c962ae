fn main() {
    // Emits ESP-IDF cfg flags and linker args for device builds.
    // Host-target builds (tests, CI) skip this entirely.
    if std::env::var_os("CARGO_FEATURE_ESPIDF").is_some() {
        embuild::espidf::sysenv::output();
    }
}
