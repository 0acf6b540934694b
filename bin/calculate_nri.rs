use anyhow::Result;
use clap::{App, Arg};
use nft_ops::analyzers::nri::rank_tokens;
use nft_ops::storage::read::read_tokens_metadata;
use nft_ops::storage::write::{write_nri, write_ranking};

pub fn main() -> Result<()> {
    env_logger::init();

    let matches = App::new("calculate-nri")
        .version("1.0")
        .about("Ranks a collection by joint trait probability and derives each token's normalized rarity index")
        .arg(
            Arg::with_name("input")
                .short("-i")
                .long("input")
                .value_name("METADATA")
                .help("Token metadata json file")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("output")
                .short("-o")
                .long("output")
                .value_name("NRI")
                .help("Output file for the flat nri array")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("report")
                .short("-r")
                .long("report")
                .value_name("REPORT")
                .help("Optional per-token ranking report")
                .takes_value(true),
        )
        .get_matches();

    let input = matches.value_of("input").unwrap();
    let output = matches.value_of("output").unwrap_or("nri.json");

    let tokens = read_tokens_metadata(input)?;
    println!("Ranking {} tokens...", tokens.len());

    let ranked = rank_tokens(&tokens)?;

    write_nri(output, &ranked)?;
    println!("  Wrote {} indices to {}", ranked.len(), output);

    if let Some(report) = matches.value_of("report") {
        write_ranking(report, &ranked)?;
        println!("  Wrote ranking report to {}", report);
    }

    Ok(())
}
