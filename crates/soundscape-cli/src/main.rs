mod command;
mod io;
mod report;

fn main() -> anyhow::Result<()> {
    command::run()
}
