use wrenbind::cli;

fn main() -> anyhow::Result<()> {
    cli::run()
}
