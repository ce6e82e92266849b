use colored::*;
use reshape::prelude::*;
use std::{fmt::Debug, process};
use structopt::StructOpt;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Reshape a record built from the command line, printing it after every step.
#[derive(Debug, Clone, StructOpt)]
struct Options {
    /// A count, which will later be narrowed to a `u8`
    #[structopt(short, long, default_value = "42")]
    count: u32,
    /// A label for the record
    #[structopt(short, long, default_value = "widget")]
    label: String,
    /// Whether the record is enabled
    #[structopt(short, long)]
    enabled: bool,
    /// An offset, which will later be narrowed to an `i8`
    #[structopt(short, long, default_value = "-7", allow_hyphen_values = true)]
    offset: i64,
    /// A marker character appended to the record
    #[structopt(short, long, default_value = "*")]
    marker: char,
}

fn show(step: &str, record: &impl Debug) {
    debug!(step, "applied");
    println!("{:>20} {}", step.blue(), format!("{:?}", record).bold());
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let options = Options::from_args();
    info!(?options, "starting pipeline");

    let record = (options.count, options.label, options.enabled, options.offset);
    show("from arguments", &record);

    let record = record.push_back(options.marker);
    show("push_back", &record);

    let record = record.rotate_left();
    show("rotate_left", &record);

    let record = record.reverse();
    show("reverse", &record);

    let (front, back) = record.split::<2>();
    show("split::<2> front", &front);
    show("split::<2> back", &back);

    let record = back.append(front);
    show("append", &record);

    let snapshot = record.borrowed().resolve_refs();
    show("resolve_refs", &snapshot);

    let is_set = overload!(
        |c: &char| *c != ' ',
        |n: &i64| *n != 0,
        |b: &bool| *b,
        |s: &String| !s.is_empty(),
        |n: &u32| *n != 0,
    );
    let set = record.count_if(is_set);
    info!(set, "counted set slots");
    println!("{:>20} {}", "count_if".blue(), set.to_string().bold());

    let (narrow, rest) = record.permute::<Indices![3, 0, 1, 2, 4]>().split::<2>();
    show("permute + split", &narrow);
    match narrow.try_convert::<(u8, i8)>() {
        Ok(small) => {
            show("try_convert", &small);
            println!("{}", format!("done: {:?}", small.append(rest)).green());
        }
        Err(err) => {
            eprintln!("{}", format!("error: {}", err).red());
            process::exit(1);
        }
    }
}
