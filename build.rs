fn main() {
    // No-op outside an esp-idf build environment; emits linker and include
    // configuration when building for the target.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
