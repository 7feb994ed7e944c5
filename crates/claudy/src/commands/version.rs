pub fn run() -> anyhow::Result<()> {
    println!("claudy {}", env!("CARGO_PKG_VERSION"));
    println!("Animated mascot for AI coding assistant sessions");
    Ok(())
}
