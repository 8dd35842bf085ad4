use anyhow::{Context, Result};
use clap::Parser;
use msgmap_scanner::database::{is_placeholder, parse_hex};
use msgmap_scanner::scanner::NoProgress;
use msgmap_scanner::{AnnotationDb, Error, Finder};
use std::fs::File;
use std::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// PE file to scan
    #[arg(short, long)]
    input: String,

    /// `ADDRESS NAME` list to import before scanning
    #[arg(long)]
    symbols: Option<String>,

    /// Do not synthesize sub_/off_ placeholder names
    #[arg(long)]
    no_auto_names: bool,

    /// Make a message map at this address instead of scanning
    #[arg(short, long, value_parser = parse_address)]
    address: Option<u64>,

    /// Print every recorded annotation when done
    #[arg(long)]
    annotations: bool,
}

fn parse_address(s: &str) -> std::result::Result<u64, String> {
    parse_hex(s).map_err(|e| format!("invalid address {s:?}: {e}"))
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "msgmap_scanner=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let file = File::open(&args.input).with_context(|| format!("Failed to open {}", args.input))?;
    let mut finder = Finder::new(file)?;

    if let Some(path) = &args.symbols {
        let names = File::open(path).with_context(|| format!("Failed to open {path}"))?;
        finder.import_names(BufReader::new(names))?;
    }
    if !args.no_auto_names {
        finder.seed_placeholders();
    }

    match args.address {
        Some(addr) => make(&mut finder, addr)?,
        None => scan(&mut finder)?,
    }

    if args.annotations {
        print_annotations(finder.database());
    }

    Ok(())
}

fn scan(finder: &mut Finder) -> Result<()> {
    println!("Scanning for message maps...");
    let report = finder.scan(&NoProgress)?;

    println!(
        "{:>5}  {:<18}  {:<48}  {:>9}",
        "Index", "Address", "Name", "Entry Num"
    );
    for map in &report.maps {
        println!(
            "{:>5}  {:<18}  {:<48}  {:>9}",
            map.index,
            format!("{:#X}", map.address),
            map.name,
            map.entry_count
        );
    }

    println!(
        "===== Search complete, total {}, new resolution {} =====",
        report.total(),
        report.newly_resolved
    );
    Ok(())
}

fn make(finder: &mut Finder, addr: u64) -> Result<()> {
    match finder.make(addr) {
        Ok((confidence, map)) => {
            let offset = finder.image().file_offset(addr)?;
            println!(
                "{:#X} (file offset {:#X}): {:?} match, {} entries, terminator at {:#X}",
                addr,
                offset,
                confidence,
                map.entry_count(),
                map.terminator
            );
            Ok(())
        }
        Err(Error::NotAMessageMap(_)) => {
            println!("{addr:#X}: This is not a message map");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn print_annotations(db: &AnnotationDb) {
    for (addr, offset) in db.offsets() {
        println!("{addr:#X}  offset -> {:#X}", offset.target);
    }
    for (addr, overlay) in db.structs() {
        println!("{addr:#X}  struct {} ({} bytes)", overlay.kind, overlay.size);
    }
    for (addr, name) in db.names().filter(|&(a, n)| !is_placeholder(n, a)) {
        println!("{addr:#X}  name {name}");
    }
    for (addr, comment) in db.comments() {
        println!("{addr:#X}  comment");
        for line in comment.lines() {
            println!("    {line}");
        }
    }
}
