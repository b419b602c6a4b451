use anyhow::Result;

fn main() -> Result<()> {
    abc_tunebook::cli::run()
}
