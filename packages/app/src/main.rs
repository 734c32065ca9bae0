use dropdown_app::{app, config};
use silkenweb::mount;

fn main() {
    mount("app", app(config::dropdown_attributes()));
}
