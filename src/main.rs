use anyhow::Result;
use is_terminal::IsTerminal;
use std::io;

use listdiff::args::{self, Command};
use listdiff::operands::{first_and_second, item_count, lines_of, ordered};
use listdiff::render::ItemCounts;
use listdiff::{compare, help, render, styles};

fn main() -> Result<()> {
    env_logger::init();

    let args = match args::parsed()? {
        Command::Help(color) => return help::print(color),
        Command::Version => {
            println!("{}", help::version());
            return Ok(());
        }
        Command::Compare(args) => args,
    };
    log::debug!("options: {:?}, swap: {}", args.options, args.swap);

    let (path_a, path_b) = ordered(args.list_a, args.list_b, args.swap);
    let (text_a, text_b) = first_and_second(&path_a, &path_b)?;
    let (lines_a, lines_b) = (lines_of(&text_a), lines_of(&text_b));
    let counts = ItemCounts { a: item_count(&lines_a), b: item_count(&lines_b) };
    log::debug!("A has {} items, B has {}", counts.a, counts.b);

    let comparison = compare(lines_a, lines_b, &args.options);
    log::debug!(
        "A only: {}, A ∩ B: {}, B only: {}, A ∪ B: {}",
        comparison.a_only.len(),
        comparison.intersection.len(),
        comparison.b_only.len(),
        comparison.union.len()
    );

    let styles = styles::colored(args.color);
    let stdout = io::stdout();
    if stdout.is_terminal() {
        render::output_to(&comparison, counts, args.show, args.format, styles, stdout.lock())?;
    } else {
        let out = io::BufWriter::new(stdout.lock());
        render::output_to(&comparison, counts, args.show, args.format, styles, out)?;
    }
    Ok(())
}
