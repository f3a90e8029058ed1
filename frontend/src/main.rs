use crate::app::mount;

mod activation;
mod app;
mod bootstrap;
mod components;
mod dom;
mod logging;

fn main() {
    logging::init();
    bootstrap::install();
    mount();
}
