use anyhow::Result;

fn main() -> Result<()> {
    social_cli::main_entry()
}
