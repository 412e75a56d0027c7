fn main() {
    #[cfg(feature = "csr")]
    predict_portal::start();
}
