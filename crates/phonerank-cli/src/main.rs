mod command;
mod loader;
mod schema;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
