use gini_impurity::data::io::read_label_column;
use gini_impurity::data::labels::ClassFrequencies;
use gini_impurity::metrics::impurity::normalized_gini;
use gini_impurity::range::{impurity_range, RangeParams};
use log::info;
use std::env;
use std::error::Error;
use std::process;

const USAGE: &str = "Usage: gini-demo [MAX_CLASSES] [CSV_PATH COLUMN]";

fn print_range(max_classes: usize) -> Result<(), Box<dyn Error>> {
    let mut params = RangeParams::new();
    params.set_max_classes(max_classes)?;
    params.set_seed(Some(0));

    println!("{:>8} {:>10} {:>10}", "classes", "impurity", "bound");
    for row in impurity_range(&params)? {
        println!(
            "{:>8} {:>10.4} {:>10.4}",
            row.num_classes, row.impurity, row.bound
        );
    }
    Ok(())
}

fn print_column(path: &str, column: usize) -> Result<(), Box<dyn Error>> {
    let labels = read_label_column(path, column, true)?;
    let freq = ClassFrequencies::from_labels(&labels)?;

    println!("File: {} (column {})", path, column);
    println!("Samples: {}", freq.total());
    println!("Classes: {}", freq.num_classes());
    println!("Gini impurity: {:.4}", freq.gini());
    println!("Normalized gini: {:.4}", normalized_gini(&labels)?);
    println!(
        "Majority class: {} (accuracy {:.2}%)",
        freq.majority_class(),
        freq.majority_accuracy() * 100.0
    );
    Ok(())
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let max_classes = match args.first() {
        Some(arg) => arg
            .parse::<usize>()
            .map_err(|_| format!("MAX_CLASSES must be a positive integer, got '{}'", arg))?,
        None => RangeParams::new().max_classes(),
    };
    info!("Printing impurity range up to {} classes", max_classes);
    print_range(max_classes)?;

    match &args[args.len().min(1)..] {
        [] => Ok(()),
        [path, column] => {
            let column = column
                .parse::<usize>()
                .map_err(|_| format!("COLUMN must be a non-negative integer, got '{}'", column))?;
            println!();
            print_column(path, column)
        }
        _ => Err(USAGE.into()),
    }
}

fn main() {
    env_logger::init();

    let args = env::args().skip(1).collect::<Vec<_>>();
    if let Err(err) = run(&args) {
        eprintln!("{}", err);
        process::exit(1);
    }
}
