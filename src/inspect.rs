use bureau_ingest::configs::ServiceConfig;
use bureau_ingest::experian::navigator::{collect_account_nodes, locate_root};
use bureau_ingest::ingest::parse_report;
use bureau_ingest::xml_tree::parse_xml_tree;
use std::collections::BTreeMap;
use std::path::Path;

type DynError = Box<dyn std::error::Error + Send + Sync + 'static>;

fn main() -> Result<(), DynError> {
    let mut args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.len() != 1 {
        eprintln!("Usage: inspect <xml_file>");
        std::process::exit(2);
    }

    let xml_path = args.remove(0);
    let xml = std::fs::read_to_string(&xml_path)?;
    let options = ServiceConfig::load_default()?.extract_options();

    let document = parse_xml_tree(&xml)?;
    let mut sources: BTreeMap<&str, usize> = BTreeMap::new();
    for hit in collect_account_nodes(locate_root(&document), options.account_merge) {
        *sources.entry(hit.source).or_default() += 1;
    }
    for (source, count) in &sources {
        eprintln!("account hits: {source} x{count}");
    }

    let file_name = Path::new(&xml_path)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| xml_path.clone());
    let report = parse_report(&xml, &file_name, &options)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
