fn main() {
    mycheva_frontend::run();
}
