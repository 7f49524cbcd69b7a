use argbind::CommandLineParser;
use std::path::PathBuf;

// cargo run --example copy -- --verbose in.txt -o out.txt --times=2
fn main() {
    let mut parser = CommandLineParser::from_env();
    let input = parser
        .positional::<PathBuf>("input")
        .required()
        .help("The file to copy.")
        .key();
    let output = parser
        .option::<PathBuf>(("--output", "-o"))
        .required()
        .help("Where to copy to.")
        .key();
    let times = parser
        .option::<u64>(("--times", "-t"))
        .help("How many copies to make.")
        .key();
    let verbose = parser.option::<bool>(("--verbose", "-v")).key();

    let matches = parser.parse_or_exit();
    let input = matches.get(input).expect("input is required");
    let output = matches.get(output).expect("output is required");
    let times = matches.get_or(times, 1);

    if matches.get_or(verbose, false) {
        println!("Copying {} to {}.", input.display(), output.display());
    }

    for i in 0..times {
        println!("copy #{i}: {} -> {}", input.display(), output.display());
    }
}
