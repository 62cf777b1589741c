use anyhow::Context;
use ducky_core::ScriptLoader;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <script.bin>", args[0]);
        std::process::exit(1);
    }

    if let Err(e) = dump(&args[1]) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn dump(path: &str) -> anyhow::Result<()> {
    let data = std::fs::read(path).with_context(|| format!("failed to read {}", path))?;
    let instructions = ScriptLoader::load(&data).with_context(|| format!("failed to decode {}", path))?;

    println!("Length: {} bytes, {} instructions", data.len(), instructions.len());
    for (index, instruction) in instructions.iter().enumerate() {
        println!("{:4}: {}", index, instruction);
    }

    Ok(())
}
