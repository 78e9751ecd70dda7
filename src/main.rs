fn main() {
    #[cfg(feature = "csr")]
    jobify::start();
}
